use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not guess the type of the file {}", .path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("Front-matter is missing - file={}", .path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("End of front-matter is missing - file={}", .path.display())]
    UnterminatedFrontMatter { path: PathBuf },

    #[error("Error parsing {} - {} - file={}", .format, .reason, .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },

    #[error("Duplicate entry id '{}' in collection {} - file={}", .id, .collection, .path.display())]
    DuplicateEntry {
        collection: String,
        id: String,
        path: PathBuf,
    },

    #[error("{count} content entries failed validation")]
    Invalid { count: usize },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> LoadError {
        LoadError::Io { path: path.into(), source }
    }
}
