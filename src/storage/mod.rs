//! # Storage Layer
//!
//! Persistence for PYQ CLI.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Papers & topics | custom line-delimited text | `.pyq/topics.txt` |
//! | Config | TOML | `.pyq/config.toml` |
//!
//! ## Concurrency Safety
//!
//! [`PaperStore`] rereads and rewrites the whole backing file on every
//! mutation. Writes are atomic (temp file + rename) and guarded by `fs2`
//! file locks; the read-mutate-write cycle itself is not transactional, so
//! two racing mutations keep last-write-wins semantics.
//!
//! ## Key Types
//!
//! - [`Tracker`] - Entry point for accessing a `.pyq/` tracker directory
//! - [`PaperStore`] - Read/write papers in the flat-file format
//! - [`TrackerConfig`] / [`GlobalConfig`] - TOML configuration

mod config;
mod flatfile;
mod format;
mod tracker;

pub use config::{find_tracker_root, ConfigError, DefaultFormat, GlobalConfig, TrackerConfig};
pub use flatfile::{PaperStore, StoreError};
pub use tracker::{Tracker, TrackerError};
