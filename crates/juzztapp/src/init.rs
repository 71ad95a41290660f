//! # Context Setup
//!
//! [`initialize`] wires the production stack: it resolves the data directory,
//! loads configuration, and builds a [`JuzztApi`] over an [`FsBackend`] and an
//! [`ApiClient`].
//!
//! ## Data Directory
//!
//! First match wins:
//!
//! 1. The `data_override` argument (the CLI's `--data` flag)
//! 2. The `JUZZT_DATA` environment variable
//! 3. The OS data directory from [`directories::ProjectDirs`]
//!
//! ## Config Search Paths
//!
//! `juzzt.toml` is read from the OS config directory and then from the data
//! directory, merged, so a data directory can override the user's defaults.

use crate::api::JuzztApi;
use crate::config::JuzztConfig;
use crate::error::{JuzztError, Result};
use crate::remote::ApiClient;
use crate::store::FsBackend;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV: &str = "JUZZT_DATA";
pub const CONFIG_FILE: &str = "juzzt.toml";

pub struct JuzztContext {
    pub api: JuzztApi<FsBackend, ApiClient>,
    pub config: JuzztConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "juzzt", "juzzt")
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JuzztError::Store("Could not determine a data directory".to_string()))
}

/// Directories searched for `juzzt.toml`, lowest priority first.
pub fn config_search_paths(data_dir: &std::path::Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dirs) = project_dirs() {
        let global = dirs.config_dir().to_path_buf();
        if global != data_dir {
            paths.push(global);
        }
    }
    paths.push(data_dir.to_path_buf());
    paths
}

pub fn load_config(data_dir: &std::path::Path) -> JuzztConfig {
    let search_paths = config_search_paths(data_dir)
        .into_iter()
        .map(SearchPath::Path)
        .collect();
    match Clapfig::builder()
        .app_name("juzzt")
        .file_name(CONFIG_FILE)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration, using defaults");
            JuzztConfig::default()
        }
    }
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<JuzztContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    tracing::debug!(data_dir = %data_dir.display(), api_url = %config.api_url, "initializing");

    let backend = FsBackend::new(data_dir.clone());
    let remote = ApiClient::from_config(&config)?;
    let api = JuzztApi::new(backend, remote, config.clone());

    Ok(JuzztContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn override_wins() {
        let dir = tempdir().unwrap();
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn data_dir_is_searched_last() {
        let dir = tempdir().unwrap();
        let paths = config_search_paths(dir.path());
        assert_eq!(paths.last().unwrap(), dir.path());
    }

    #[test]
    fn config_file_in_data_dir_is_loaded() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "page_size = 4\nrecords_path = \"/api/records\"\n",
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.page_size, 4);
        assert_eq!(config.records_path, "/api/records");
        assert_eq!(config.sale_threshold, 20.0);
    }

    #[test]
    fn initialize_opens_empty_cart() {
        let dir = tempdir().unwrap();
        let ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.data_dir, dir.path());
        assert!(ctx.api.cart_store().cart().is_empty());
        assert!(!ctx.api.is_logged_in());
    }
}
