//! Run configuration.
//!
//! A JSON document read once at startup. Only the repository URL, the
//! checkout destination and the dataset output path are required; the
//! mined extension defaults to Kotlin and the per-file deadline to
//! 15 seconds.

use crate::error::{MineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Run configuration for the `mine` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the repository to mine.
    pub repository_url: String,

    /// Local directory the repository is cloned into.
    pub clone_to: PathBuf,

    /// Path of the CSV dataset to produce.
    pub dataset_name: PathBuf,

    /// File extension of candidate files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Per-file processing deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_extension() -> String {
    "kt".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Config {
    /// Per-file deadline as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load and validate a config from a JSON file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| MineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&content).map_err(|e| MineError::Config {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {}", e),
    })?;

    if config.repository_url.is_empty() {
        return Err(MineError::Config {
            path: path.to_path_buf(),
            message: "'repository_url' must not be empty".to_string(),
        });
    }
    if config.clone_to.as_os_str().is_empty() {
        return Err(MineError::Config {
            path: path.to_path_buf(),
            message: "'clone_to' must not be empty".to_string(),
        });
    }
    if config.dataset_name.as_os_str().is_empty() {
        return Err(MineError::Config {
            path: path.to_path_buf(),
            message: "'dataset_name' must not be empty".to_string(),
        });
    }

    Ok(config)
}
