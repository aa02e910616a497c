//! Flat-file paper store
//!
//! The whole dataset is reparsed from disk and rewritten on every mutation.
//! Writes go through a temp file and an atomic rename, guarded by `fs2`
//! file locks; the read-mutate-write cycle itself is not transactional, so
//! two racing mutations keep last-write-wins semantics.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use thiserror::Error;
use tracing::{debug, warn};

use super::format;
use crate::domain::{Paper, Topic, TopicUpdate};

/// Caller-visible failures of the store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Paper code is required")]
    EmptyCode,

    #[error("Paper not found: {0}")]
    PaperNotFound(String),

    #[error("Topic {id} not found in paper {paper}")]
    TopicNotFound { paper: String, id: usize },
}

/// Store for papers in the line-delimited flat-file format
pub struct PaperStore {
    path: PathBuf,
}

impl PaperStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every paper from the backing file.
    ///
    /// A missing file is an empty store. Any other failure (I/O error,
    /// invalid UTF-8) is logged at WARN and also reported as an empty
    /// store - callers always get a list.
    pub fn read_papers(&self) -> Vec<Paper> {
        match self.try_read() {
            Ok(papers) => papers,
            Err(e) => {
                warn!(
                    "failed to read {}, treating store as empty: {:#}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn try_read(&self) -> Result<Vec<Paper>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open paper store: {}", self.path.display()))?;

        // Shared lock for reading, released when the file is dropped
        file.lock_shared()
            .context("Failed to acquire read lock on paper store")?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read paper store: {}", self.path.display()))?;

        Ok(format::parse(&content))
    }

    /// Writes all papers to the store (full rewrite)
    pub fn write_papers(&self, papers: &[Paper]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("txt.tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on paper store")?;

            file.write_all(format::serialize(papers).as_bytes())
                .with_context(|| format!("Failed to write paper store: {}", self.path.display()))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        debug!("rewrote {} with {} paper(s)", self.path.display(), papers.len());
        Ok(())
    }

    /// Lists every paper (same as a bare read)
    pub fn list_papers(&self) -> Vec<Paper> {
        self.read_papers()
    }

    /// Creates an empty paper. The code is trimmed; a trimmed-empty code is
    /// rejected. Duplicate codes are not checked - two creates with the
    /// same code leave two papers behind.
    pub fn create_paper(&self, code: &str) -> Result<Paper> {
        let code = code.trim();
        if code.is_empty() {
            return Err(StoreError::EmptyCode.into());
        }

        let mut papers = self.read_papers();
        papers.push(Paper::new(code));
        self.write_papers(&papers)?;

        Ok(Paper::new(code))
    }

    /// Appends a topic to the end of an existing paper's list
    pub fn create_topic(&self, paper_code: &str, name: &str, links: &str) -> Result<Topic> {
        let code = paper_code.trim();
        let mut papers = self.read_papers();

        let paper = find_paper(&mut papers, code)?;
        let topic = paper.push_topic(name, links).clone();

        self.write_papers(&papers)?;
        Ok(topic)
    }

    /// Applies one update action to a topic, located by paper code and
    /// positional id
    pub fn update_topic(
        &self,
        paper_code: &str,
        topic_id: usize,
        update: TopicUpdate,
    ) -> Result<Topic> {
        let code = paper_code.trim();
        let mut papers = self.read_papers();

        let paper = find_paper(&mut papers, code)?;
        let topic = paper.topic_mut(topic_id).ok_or(StoreError::TopicNotFound {
            paper: code.to_string(),
            id: topic_id,
        })?;

        topic.apply(update);
        let topic = topic.clone();

        self.write_papers(&papers)?;
        Ok(topic)
    }

    /// Removes a topic; the remaining topics in that paper are reindexed to
    /// dense zero-based ids
    pub fn delete_topic(&self, paper_code: &str, topic_id: usize) -> Result<()> {
        let code = paper_code.trim();
        let mut papers = self.read_papers();

        let paper = find_paper(&mut papers, code)?;
        paper
            .remove_topic(topic_id)
            .ok_or(StoreError::TopicNotFound {
                paper: code.to_string(),
                id: topic_id,
            })?;

        self.write_papers(&papers)
    }

    /// Removes every paper with the given code; a no-op when none match
    pub fn delete_paper(&self, code: &str) -> Result<()> {
        let code = code.trim();
        let mut papers = self.read_papers();
        papers.retain(|p| p.code != code);
        self.write_papers(&papers)
    }
}

/// First paper whose stored code equals the (already trimmed) input code.
/// Stored codes are compared verbatim.
fn find_paper<'a>(papers: &'a mut [Paper], code: &str) -> Result<&'a mut Paper, StoreError> {
    papers
        .iter_mut()
        .find(|p| p.code == code)
        .ok_or_else(|| StoreError::PaperNotFound(code.to_string()))
}
