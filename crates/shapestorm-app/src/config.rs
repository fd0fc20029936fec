//! Config-file loading.
//!
//! The sim consumes typed `GameConfig` bundles; reading and parsing them
//! is this layer's job, and a malformed or unreadable file is fatal to
//! the process, never a sim concern.

use std::fs;
use std::path::Path;

use thiserror::Error;

use shapestorm_core::config::GameConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a `GameConfig` from a JSON file.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
