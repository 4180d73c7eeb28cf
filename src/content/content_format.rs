use std::path::Path;

use crate::collection::CollectionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Markdown with a front-matter block
    Markdown,
    Json,
    Yaml,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Option<ContentFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "mdx" | "markdown" => Some(ContentFormat::Markdown),
            "json" => Some(ContentFormat::Json),
            "yaml" | "yml" => Some(ContentFormat::Yaml),
            _ => None,
        }
    }

    pub fn belongs_to(&self, kind: CollectionType) -> bool {
        match self {
            ContentFormat::Markdown => kind == CollectionType::Content,
            ContentFormat::Json | ContentFormat::Yaml => kind == CollectionType::Data,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ContentFormat::from_path(&PathBuf::from("posts/a.md")), Some(ContentFormat::Markdown));
        assert_eq!(ContentFormat::from_path(&PathBuf::from("posts/a.MDX")), Some(ContentFormat::Markdown));
        assert_eq!(ContentFormat::from_path(&PathBuf::from("authors/b.yml")), Some(ContentFormat::Yaml));
        assert_eq!(ContentFormat::from_path(&PathBuf::from("posts/cover.png")), None);
        assert_eq!(ContentFormat::from_path(&PathBuf::from("posts/README")), None);
    }

    #[test]
    fn test_belongs_to() {
        assert!(ContentFormat::Markdown.belongs_to(CollectionType::Content));
        assert!(!ContentFormat::Markdown.belongs_to(CollectionType::Data));
        assert!(ContentFormat::Json.belongs_to(CollectionType::Data));
    }
}
