//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::BackendEntry;

/// Error type for configuration loading. All variants are startup-fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the ordered backend list from a JSON file.
pub fn load_backends(path: &Path) -> Result<Vec<BackendEntry>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<BackendEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}
