use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::collection::CollectionType;
use crate::content::content_format::ContentFormat;
use crate::content::EntryId;

/// Files of one collection directory. An entry is either a file directly in the
/// directory or a sub-directory holding an index file (posts with images).
pub struct EntryList {
    pub root_dir: PathBuf,
    pub index_base_name: String,
    pub kind: CollectionType,
}

impl EntryList {
    /// Every entry of the directory, sorted by path.
    pub fn retrieve(&self) -> io::Result<Vec<(EntryId, PathBuf)>> {
        let mut entries = self.retrieve_files()?;
        entries.extend(self.retrieve_dirs()?);
        entries.sort_by(|(_, a), (_, b)| a.cmp(b));
        Ok(entries)
    }

    fn retrieve_files(&self) -> io::Result<Vec<(EntryId, PathBuf)>> {
        let mut files = vec![];
        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() || is_ignored(&entry.file_name()) {
                continue;
            }

            let path = entry.path();
            if !self.accepts(&path) {
                continue;
            }
            if let Some(id) = entry_id_from_path(&path, &self.index_base_name) {
                files.push((id, path));
            }
        }
        Ok(files)
    }

    fn retrieve_dirs(&self) -> io::Result<Vec<(EntryId, PathBuf)>> {
        let mut dirs = vec![];
        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() || is_ignored(&entry.file_name()) {
                continue;
            }

            // Filtering only the dirs with an index inside
            if let Some(index) = self.find_index(&entry.path())? {
                if let Some(id) = entry_id_from_path(&index, &self.index_base_name) {
                    dirs.push((id, index));
                }
            }
        }
        Ok(dirs)
    }

    fn find_index(&self, dir: &Path) -> io::Result<Option<PathBuf>> {
        let mut candidates = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && is_index(&path, &self.index_base_name) && self.accepts(&path) {
                candidates.push(path);
            }
        }
        candidates.sort();
        Ok(candidates.into_iter().next())
    }

    fn accepts(&self, path: &Path) -> bool {
        ContentFormat::from_path(path)
            .map(|format| format.belongs_to(self.kind))
            .unwrap_or(false)
    }
}

fn is_ignored(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .map(|name| name.starts_with('.') || name.starts_with('_'))
        .unwrap_or(true)
}

fn is_index(path: &Path, index_base_name: &str) -> bool {
    path.file_stem().and_then(|stem| stem.to_str()) == Some(index_base_name)
}

/// `posts/a_post.md` is `a_post`, `posts/a_post/index.md` is `a_post` too.
pub fn entry_id_from_path(path: &Path, index_base_name: &str) -> Option<EntryId> {
    let name = if is_index(path, index_base_name) {
        path.parent()?.file_name()?
    } else {
        path.file_stem()?
    };
    name.to_str().map(|name| EntryId(name.to_string()))
}
