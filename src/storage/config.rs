//! Configuration handling
//!
//! Configuration is stored in `.pyq/config.toml` (tracker) and
//! `~/.config/pyq/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format preference in the global config
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Text,
    Json,
}

/// Tracker-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Backing flat file, relative to `.pyq/`
    pub data_file: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: "topics.txt".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Loads the tracker config from a tracker root, falling back to
    /// defaults when no config file exists
    pub fn load(tracker_root: &Path) -> Result<Self> {
        let config_path = tracker_root.join(".pyq").join("config.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read tracker config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse tracker config")
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: DefaultFormat,
}

impl GlobalConfig {
    /// Loads the global config from the user config directory, falling back
    /// to defaults when missing
    pub fn load() -> Result<Self> {
        let config_dir = match Self::config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "pyq", "pyq-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Finds the tracker root by walking up from the current directory looking
/// for a `.pyq/` directory
pub fn find_tracker_root() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        if current.join(".pyq").is_dir() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}
