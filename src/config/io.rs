// src/config/io.rs
use super::{Config, CONFIG_FILE};
use crate::error::{RankError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads `pagerank.toml` from `dir`, or defaults if the file is missing.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_file(&path)
}

/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let config = Config::parse_toml(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
