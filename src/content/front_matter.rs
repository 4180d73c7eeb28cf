use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` delimited
    Yaml,
    /// `+++` delimited
    Toml,
}

impl FrontMatterFormat {
    fn delimiter(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "---",
            FrontMatterFormat::Toml => "+++",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "YAML front-matter",
            FrontMatterFormat::Toml => "TOML front-matter",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FrontMatter<'a> {
    pub format: FrontMatterFormat,
    pub block: &'a str,
    pub body: &'a str,
}

/// Splits a markdown file into its front-matter block and body.
/// Example:
/// ---
/// title: How to write a Code Review
/// ---
///
/// # How to write a Code Review
pub fn split_front_matter<'a>(file_path: &Path, raw: &'a str) -> Result<FrontMatter<'a>, LoadError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');
    let mut offset = 0;

    // Leading empty lines are ok
    let format = loop {
        let Some(line) = lines.next() else {
            return Err(LoadError::MissingFrontMatter { path: file_path.to_path_buf() });
        };
        offset += line.len();

        match line.trim() {
            "" => continue,
            "---" => break FrontMatterFormat::Yaml,
            "+++" => break FrontMatterFormat::Toml,
            _ => return Err(LoadError::MissingFrontMatter { path: file_path.to_path_buf() }),
        }
    };

    let block_start = offset;
    for line in lines {
        if line.trim_end() == format.delimiter() {
            return Ok(FrontMatter {
                format,
                block: &raw[block_start..offset],
                body: &raw[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    Err(LoadError::UnterminatedFrontMatter { path: file_path.to_path_buf() })
}

pub fn parse_front_matter(file_path: &Path, front_matter: &FrontMatter) -> Result<Value, LoadError> {
    if front_matter.block.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let parse_error = |reason: String| LoadError::Parse {
        path: file_path.to_path_buf(),
        format: front_matter.format.name(),
        reason,
    };

    match front_matter.format {
        FrontMatterFormat::Yaml => serde_yaml::from_str::<Value>(front_matter.block)
            .map_err(|e| parse_error(e.to_string())),
        FrontMatterFormat::Toml => toml::from_str::<toml::Table>(front_matter.block)
            .map(|table| toml_to_json(toml::Value::Table(table)))
            .map_err(|e| parse_error(e.to_string())),
    }
}

/// TOML datetimes become their text form; date fields accept both.
pub(crate) fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect()
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("posts/20200522_how_to_write_a_code_review.md")
    }

    #[test]
    fn test_split_yaml() {
        let content = "\n---\ntitle: Hello\n---\n\n# Hello\nBody\n";
        let front_matter = split_front_matter(&path(), content).unwrap();
        assert_eq!(front_matter, FrontMatter {
            format: FrontMatterFormat::Yaml,
            block: "title: Hello\n",
            body: "\n# Hello\nBody\n",
        });
    }

    #[test]
    fn test_split_toml_crlf() {
        let content = "+++\r\ntitle = \"Hello\"\r\n+++\r\nBody";
        let front_matter = split_front_matter(&path(), content).unwrap();
        assert_eq!(front_matter.format, FrontMatterFormat::Toml);
        assert_eq!(front_matter.block, "title = \"Hello\"\r\n");
        assert_eq!(front_matter.body, "Body");
    }

    #[test]
    fn test_split_missing() {
        let content = "# Hello\n---\ntitle: Hello\n---\n";
        let res = split_front_matter(&path(), content);
        assert!(matches!(res, Err(LoadError::MissingFrontMatter { .. })));

        let res = split_front_matter(&path(), "");
        assert!(matches!(res, Err(LoadError::MissingFrontMatter { .. })));
    }

    #[test]
    fn test_split_unterminated() {
        let content = "---\ntitle: Hello\n\n# Hello\n";
        let res = split_front_matter(&path(), content);
        assert!(matches!(res, Err(LoadError::UnterminatedFrontMatter { .. })));
    }

    #[test]
    fn test_parse_yaml() {
        let front_matter = FrontMatter {
            format: FrontMatterFormat::Yaml,
            block: "title: Hello\ntags: [a, b]\nthumbnail:\n  src: /a.png\n",
            body: "",
        };
        let value = parse_front_matter(&path(), &front_matter).unwrap();
        assert_eq!(value, json!({ "title": "Hello", "tags": ["a", "b"], "thumbnail": { "src": "/a.png" } }));
    }

    #[test]
    fn test_parse_toml_dates() {
        let front_matter = FrontMatter {
            format: FrontMatterFormat::Toml,
            block: "date = 2024-03-01\nupdated = 2024-03-02T10:00:00Z\nminutes = 5\n",
            body: "",
        };
        let value = parse_front_matter(&path(), &front_matter).unwrap();
        assert_eq!(value, json!({ "date": "2024-03-01", "updated": "2024-03-02T10:00:00Z", "minutes": 5 }));
    }

    #[test]
    fn test_parse_empty_block() {
        let front_matter = FrontMatter { format: FrontMatterFormat::Yaml, block: "\n", body: "" };
        assert_eq!(parse_front_matter(&path(), &front_matter).unwrap(), json!({}));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let front_matter = FrontMatter { format: FrontMatterFormat::Yaml, block: "title: [unclosed\n", body: "" };
        let res = parse_front_matter(&path(), &front_matter);
        assert!(matches!(res, Err(LoadError::Parse { format: "YAML front-matter", .. })));
    }
}
