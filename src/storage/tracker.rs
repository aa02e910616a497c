//! Tracker directory management
//!
//! Handles `.pyq/` initialization and provides access to the paper store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::{find_tracker_root, TrackerConfig};
use super::PaperStore;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Not in a pyq tracker. Run 'pyq init' first.")]
    NotInTracker,
}

/// A pyq tracker directory
pub struct Tracker {
    root: PathBuf,
    config: TrackerConfig,
}

impl Tracker {
    /// Opens an existing tracker at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(".pyq").is_dir() {
            return Err(TrackerError::NotInTracker.into());
        }

        let config = TrackerConfig::load(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the tracker at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = find_tracker_root().ok_or(TrackerError::NotInTracker)?;

        Self::open(root)
    }

    /// Initializes a new tracker at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let pyq_dir = root.join(".pyq");

        fs::create_dir_all(&pyq_dir)
            .with_context(|| format!("Failed to create .pyq directory: {}", pyq_dir.display()))?;

        let config_path = pyq_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# pyq configuration

# Backing flat file, relative to .pyq/
data_file = "topics.txt"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the tracker root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .pyq directory path
    pub fn pyq_dir(&self) -> PathBuf {
        self.root.join(".pyq")
    }

    /// Returns the configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the paper store backed by this tracker's data file
    pub fn paper_store(&self) -> PaperStore {
        PaperStore::new(self.pyq_dir().join(&self.config.data_file))
    }
}
