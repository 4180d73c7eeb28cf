use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use spdlog::{info, warn};

use content_collections::collections;
use content_collections::config::Config;
use content_collections::loader::CollectionLoader;
use content_collections::logger::configure_logger;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "collections.toml";

/// Validates the front-matter of every content entry. Fails when any entry is invalid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Content directory, overrides the configured one
    #[arg(short = 'd', long)]
    content_dir: Option<String>,
}

/// A config given with `--config` must load. A config that is only looked up may be
/// replaced by `--content-dir`.
fn resolve_config(opened: Result<Config, String>, explicit_config: bool, content_dir: Option<PathBuf>) -> Result<Config> {
    let mut config = match (opened, content_dir.clone()) {
        (Ok(config), _) => config,
        (Err(err), _) if explicit_config => bail!("{}", err),
        (Err(err), Some(content_dir)) => {
            eprintln!("{}. Using content dir {} with default settings", err, content_dir.display());
            Config::with_content_dir(content_dir)
        }
        (Err(err), None) => bail!("{}. Please run collection-check --help", err),
    };
    if let Some(content_dir) = content_dir {
        config.paths.content_dir = content_dir;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);
    let content_dir = args.content_dir.map(PathBuf::from);

    let explicit_config = config_path.is_some();
    let config = resolve_config(open_config(config_path), explicit_config, content_dir)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Checking collections in {}", config.paths.content_dir.display());

    let report = CollectionLoader::from_config(&config).load(collections())?;
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let store = report.into_result()?;
    for name in collections().names() {
        info!("{}: {} entries", name, store.len(name));
    }

    Ok(())
}
