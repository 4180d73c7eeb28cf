use std::path::PathBuf;

use serde_json::Value;

pub mod content_file;
pub mod content_format;
pub mod entry_list;
pub mod front_matter;

/// A content file of a collection, with its raw front-matter record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub id: EntryId,
    pub collection: String,
    pub file_path: PathBuf,
    pub data: Value,
    /// Text after the front-matter, not rendered
    pub body: String,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct EntryId(pub String);
