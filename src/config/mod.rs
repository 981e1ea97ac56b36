//! Configuration module
//!
//! Models the engine configuration document and locates it on disk.

mod settings;

pub use settings::*;

use std::path::PathBuf;

/// File name looked up when no path is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "search_engines.json";

/// Environment variable overriding the configuration path
pub const CONFIG_PATH_ENV: &str = "SEARCH_ENGINES_PATH";

/// Candidate configuration paths, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(DEFAULT_CONFIG_FILE),
        PathBuf::from("config").join(DEFAULT_CONFIG_FILE),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("search-engines").join(DEFAULT_CONFIG_FILE));
    }
    paths
}

/// Resolve the configuration path: explicit path first, then the first existing default.
///
/// Falls back to [`DEFAULT_CONFIG_FILE`] so the caller still gets a path to report on.
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    default_paths()
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
