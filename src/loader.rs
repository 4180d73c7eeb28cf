use std::fmt::{Display, Formatter};
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use spdlog::{debug, error, info, warn};

use crate::collection::{Collection, CollectionRegistry};
use crate::config::Config;
use crate::content::content_file::ContentFile;
use crate::content::entry_list::EntryList;
use crate::content_store::ContentStore;
use crate::error::LoadError;
use crate::schema::Violations;
use crate::text_utils::parse_date_time;

pub enum Problem {
    Shape(Violations),
    Load(LoadError),
}

/// Why one content file was rejected.
pub struct EntryDiagnostic {
    pub file_path: PathBuf,
    pub collection: String,
    pub problem: Problem,
}

impl EntryDiagnostic {
    /// One line per violation: `<file>: [<collection>] <path>: <message>`
    pub fn lines(&self) -> Vec<String> {
        let prefix = format!("{}: [{}]", self.file_path.display(), self.collection);
        match &self.problem {
            Problem::Shape(violations) => violations.iter()
                .map(|v| format!("{} {}", prefix, v))
                .collect(),
            Problem::Load(e) => vec![format!("{} {}", prefix, e)],
        }
    }
}

impl Display for EntryDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

pub struct LoadReport {
    pub store: ContentStore,
    pub diagnostics: Vec<EntryDiagnostic>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Bad content fails the build.
    pub fn into_result(self) -> Result<ContentStore, LoadError> {
        if self.diagnostics.is_empty() {
            Ok(self.store)
        } else {
            Err(LoadError::Invalid { count: self.diagnostics.len() })
        }
    }
}

pub struct CollectionLoader {
    content_dir: PathBuf,
    index_base_name: String,
}

impl CollectionLoader {
    pub fn new(content_dir: impl Into<PathBuf>, index_base_name: &str) -> CollectionLoader {
        CollectionLoader {
            content_dir: content_dir.into(),
            index_base_name: index_base_name.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> CollectionLoader {
        Self::new(config.paths.content_dir.clone(), config.defaults.index_base_name())
    }

    /// Reads and validates every entry of every collection. Entries are checked
    /// independently; only a collection directory that cannot be listed aborts.
    pub fn load(&self, registry: &CollectionRegistry) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport {
            store: ContentStore::new(),
            diagnostics: vec![],
        };

        for (name, collection) in registry.iter() {
            self.load_collection(name, collection, &mut report)?;
        }
        report.store.sort();

        if report.is_ok() {
            info!("Loaded {} collections from {}", registry.len(), self.content_dir.display());
        } else {
            error!("{} content entries failed validation", report.diagnostics.len());
        }

        Ok(report)
    }

    fn load_collection(&self, name: &str, collection: &Collection, report: &mut LoadReport) -> Result<(), LoadError> {
        let root_dir = self.content_dir.join(name);
        let entry_list = EntryList {
            root_dir: root_dir.clone(),
            index_base_name: self.index_base_name.clone(),
            kind: collection.kind(),
        };

        let entries = match entry_list.retrieve() {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Collection {} has no directory at {}", name, root_dir.display());
                return Ok(());
            }
            Err(e) => return Err(LoadError::io(root_dir, e)),
        };

        let date_field = collection.schema().date_field();
        let mut loaded = 0;
        for (id, file_path) in entries {
            debug!("Validating {} entry {}", name, file_path.display());
            let diagnostic = |problem: Problem| EntryDiagnostic {
                file_path: file_path.clone(),
                collection: name.to_string(),
                problem,
            };

            let mut entry = match ContentFile::from_file(id, file_path.clone()).and_then(|f| f.into_entry(name)) {
                Ok(entry) => entry,
                Err(e) => {
                    report.diagnostics.push(diagnostic(Problem::Load(e)));
                    continue;
                }
            };

            entry.data = match collection.parse_entry(&entry.data) {
                Ok(data) => data,
                Err(violations) => {
                    report.diagnostics.push(diagnostic(Problem::Shape(violations)));
                    continue;
                }
            };

            let date = date_field
                .and_then(|field| entry.data.get(field))
                .and_then(|value| value.as_str())
                .and_then(|value| parse_date_time(value).ok());

            match report.store.add(entry, date) {
                Ok(()) => loaded += 1,
                Err(e) => report.diagnostics.push(diagnostic(Problem::Load(e))),
            }
        }

        info!("Collection {}: {} entries loaded", name, loaded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, create_dir_all, write};

    use chrono::NaiveDate;

    use crate::collection::{define_collection, CollectionType};
    use crate::posts::{collections, POSTS};
    use crate::schema::{ObjectShape, Shape};
    use crate::test_data::{POST_DATA_MISSING_ALT, POST_DATA_NEWER, POST_DATA_TOML, POST_DATA_YAML};

    use super::*;

    fn content_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        create_dir_all(dir.path().join(POSTS)).unwrap();
        dir
    }

    #[test]
    fn test_load_posts() {
        let dir = content_dir();
        let posts_dir = dir.path().join(POSTS);
        create_dir(posts_dir.join("20200522_how_to_write_a_code_review")).unwrap();
        write(posts_dir.join("20200522_how_to_write_a_code_review").join("index.md"), POST_DATA_YAML).unwrap();
        write(posts_dir.join("20220402_what_i_learned.md"), POST_DATA_NEWER).unwrap();

        let loader = CollectionLoader::new(dir.path(), "index");
        let store = loader.load(collections()).unwrap().into_result().unwrap();

        let posts = store.posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "What I learned after 20+ years of software development");
        assert!(posts[0].tags.is_empty());
        assert_eq!(posts[1].date.date(), NaiveDate::from_ymd_opt(2020, 5, 22).unwrap());

        let entry = store.get_entry(POSTS, "20200522_how_to_write_a_code_review").unwrap();
        assert!(entry.body.contains("## Be nice"));
    }

    #[test]
    fn test_invalid_entry_fails_build() {
        let dir = content_dir();
        let posts_dir = dir.path().join(POSTS);
        write(posts_dir.join("good.md"), POST_DATA_TOML).unwrap();
        write(posts_dir.join("draft.md"), POST_DATA_MISSING_ALT).unwrap();
        write(posts_dir.join("no_header.md"), "# Just a title\n").unwrap();

        let loader = CollectionLoader::new(dir.path(), "index");
        let report = loader.load(collections()).unwrap();
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.store.len(POSTS), 1);

        let lines: Vec<String> = report.diagnostics.iter().flat_map(|d| d.lines()).collect();
        let draft = posts_dir.join("draft.md");
        assert!(lines.contains(&format!("{}: [posts] thumbnail.alt: required text is missing", draft.display())));
        let no_header = posts_dir.join("no_header.md");
        assert!(lines.contains(&format!("{}: [posts] Front-matter is missing - file={}", no_header.display(), no_header.display())));

        let res = report.into_result();
        assert!(matches!(res, Err(LoadError::Invalid { count: 2 })));
    }

    #[test]
    fn test_duplicate_ids() {
        let dir = content_dir();
        let posts_dir = dir.path().join(POSTS);
        write(posts_dir.join("hello.md"), POST_DATA_YAML).unwrap();
        create_dir(posts_dir.join("hello")).unwrap();
        write(posts_dir.join("hello").join("index.md"), POST_DATA_YAML).unwrap();

        let report = CollectionLoader::new(dir.path(), "index").load(collections()).unwrap();
        assert_eq!(report.store.len(POSTS), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(report.diagnostics[0].problem, Problem::Load(LoadError::DuplicateEntry { .. })));
    }

    #[test]
    fn test_missing_collection_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = CollectionLoader::new(dir.path(), "index").load(collections()).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.store.len(POSTS), 0);
    }

    #[test]
    fn test_data_collection() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join("authors")).unwrap();
        write(dir.path().join("authors").join("thiago.yaml"), "name: Thiago\ninitial: T\n").unwrap();
        write(dir.path().join("authors").join("ana.json"), r#"{"name": "Ana"}"#).unwrap();

        let registry = CollectionRegistry::new().with("authors", define_collection(
            CollectionType::Data,
            ObjectShape::new()
                .field("name", Shape::Text)
                .field("initial", Shape::Text),
        ));
        let report = CollectionLoader::new(dir.path(), "index").load(&registry).unwrap();
        assert_eq!(report.store.len("authors"), 1);
        assert_eq!(report.diagnostics[0].lines(), vec![format!(
            "{}: [authors] initial: required text is missing",
            dir.path().join("authors").join("ana.json").display()
        )]);
    }
}
