//! # Initialization
//!
//! Resolves where shelf keeps its data, loads the configuration from there,
//! and wires the store, the state and the search client together.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data` flag), used as-is.
//! 2. `SHELF_DATA` environment variable.
//! 3. The OS data directory, via the `directories` crate.
//!
//! The directory is created if missing. `shelf.toml` inside it is optional.

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::search::{ConnectivityMonitor, GoogleBooksClient};
use crate::store::fs::FileStore;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const DATA_ENV: &str = "SHELF_DATA";
pub const CONFIG_FILE: &str = "shelf.toml";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub connectivity: Arc<ConnectivityMonitor>,
    pub source: GoogleBooksClient,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("could not determine a data directory".to_string()))
}

/// Environment first, then `shelf.toml` in `data_dir`, then defaults.
pub fn load_config(data_dir: &Path) -> Result<ShelfConfig> {
    ShelfConfig::builder()
        .env()
        .file(data_dir.join(CONFIG_FILE))
        .load()
        .map_err(|e| ShelfError::Config(e.to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(data_override)?;
    std::fs::create_dir_all(&data_dir)?;
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = load_config(&data_dir)?;
    let names = config.collection_names()?;

    let connectivity = Arc::new(ConnectivityMonitor::default());
    let source = GoogleBooksClient::new(
        config.api_base_url.clone(),
        config.request_timeout(),
        connectivity.clone(),
    )?;

    let store = FileStore::new_fs(data_dir);
    let api = ShelfApi::new(store, &names, config.search_settings());

    Ok(ShelfContext {
        api,
        config,
        connectivity,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CollectionName;

    #[test]
    fn override_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/shelf-here"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/shelf-here"));
    }

    #[test]
    fn initialize_creates_dir_and_reads_config() {
        let tmp = tempfile::tempdir().unwrap();
        let data = tmp.path().join("nested");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(CONFIG_FILE), "collections = [\"favorites\"]\n").unwrap();

        let ctx = initialize(Some(data.clone())).unwrap();
        assert!(data.is_dir());
        assert_eq!(
            ctx.api.state().collection_names(),
            vec![CollectionName::favorites()]
        );
    }

    #[test]
    fn bad_config_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "page_size = \"many\"\n").unwrap();
        assert!(matches!(
            initialize(Some(tmp.path().to_path_buf())),
            Err(ShelfError::Config(_))
        ));
    }
}
