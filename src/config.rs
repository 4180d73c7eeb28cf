use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

const DEFAULT_INDEX_BASE_NAME: &str = "index";

#[derive(Deserialize)]
pub struct Paths {
    /// One sub-directory per collection, e.g. `content/posts`
    pub content_dir: PathBuf,
}

#[derive(Deserialize, Default)]
pub struct Defaults {
    pub index_base_name: Option<String>,
}

impl Defaults {
    pub fn index_base_name(&self) -> &str {
        self.index_base_name.as_deref().unwrap_or(DEFAULT_INDEX_BASE_NAME)
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    /// Configuration used when no file is found and only a content directory is given.
    pub fn with_content_dir(content_dir: PathBuf) -> Config {
        Config {
            paths: Paths { content_dir },
            defaults: Defaults::default(),
            log: None,
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[paths]
content_dir = "site/content"

[defaults]
index_base_name = "post"

[log]
level = "Debug"
log_to_console = true
location = "/var/log/collections/check.log"
"##).unwrap();

        assert_eq!(cfg.paths.content_dir, PathBuf::from("site/content"));
        assert_eq!(cfg.defaults.index_base_name(), "post");
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/var/log/collections/check.log")));
    }

    #[test]
    fn test_minimal_config() {
        let cfg = parse_config("[paths]\ncontent_dir = \"content\"\n").unwrap();
        assert_eq!(cfg.defaults.index_base_name(), "index");
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config("[paths]\ncontent_dir = \"${exe_dir}/content\"\n").unwrap();
        assert!(cfg.paths.content_dir.ends_with("content"));
        assert!(!cfg.paths.content_dir.starts_with("${exe_dir}"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\n").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
