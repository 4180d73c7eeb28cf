use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::content::content_format::ContentFormat;
use crate::content::front_matter::{parse_front_matter, split_front_matter};
use crate::content::{ContentEntry, EntryId};
use crate::error::LoadError;

pub struct ContentFile {
    pub id: EntryId,
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(id: EntryId, file_path: PathBuf) -> Result<ContentFile, LoadError> {
        let format = match ContentFormat::from_path(&file_path) {
            None => return Err(LoadError::UnsupportedFile { path: file_path }),
            Some(format) => format,
        };

        let raw_content = fs::read_to_string(&file_path)
            .map_err(|e| LoadError::io(&file_path, e))?;

        Ok(ContentFile {
            id,
            file_path,
            format,
            raw_content,
        })
    }

    /// Parses the record of the file. Markdown files keep their body verbatim.
    pub fn into_entry(self, collection: &str) -> Result<ContentEntry, LoadError> {
        let (data, body) = match self.format {
            ContentFormat::Markdown => {
                let front_matter = split_front_matter(&self.file_path, &self.raw_content)?;
                let data = parse_front_matter(&self.file_path, &front_matter)?;
                (data, front_matter.body.to_string())
            }
            ContentFormat::Json => {
                let data = serde_json::from_str::<Value>(&self.raw_content)
                    .map_err(|e| self.parse_error("JSON", e.to_string()))?;
                (data, String::new())
            }
            ContentFormat::Yaml => {
                let data = serde_yaml::from_str::<Value>(&self.raw_content)
                    .map_err(|e| self.parse_error("YAML", e.to_string()))?;
                (data, String::new())
            }
        };

        Ok(ContentEntry {
            id: self.id,
            collection: collection.to_string(),
            file_path: self.file_path,
            data,
            body,
        })
    }

    fn parse_error(&self, format: &'static str, reason: String) -> LoadError {
        LoadError::Parse {
            path: self.file_path.clone(),
            format,
            reason,
        }
    }
}
