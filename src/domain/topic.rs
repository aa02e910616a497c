//! Topic domain model
//!
//! A topic is one trackable study item inside a paper. Its `id` is a dense
//! positional index within the owning paper, reassigned whenever an earlier
//! topic is deleted - it is not a stable identifier.

use serde::{Deserialize, Serialize};

/// A single trackable study item within a paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Zero-based position within the owning paper's topic list
    pub id: usize,

    /// Display name (must not contain the `::` field delimiter)
    pub name: String,

    /// Whether the topic has been studied to completion
    pub completed: bool,

    /// Number of revision passes recorded
    pub revisions: u32,

    /// Comma-separated reference links, free-form
    pub links: String,
}

impl Topic {
    /// Creates a topic at the given position: not completed, zero revisions
    pub fn new(id: usize, name: impl Into<String>, links: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            revisions: 0,
            links: links.into(),
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Records one revision pass
    pub fn record_revision(&mut self) {
        self.revisions += 1;
    }

    /// Applies an update action
    pub fn apply(&mut self, update: TopicUpdate) {
        match update {
            TopicUpdate::Toggle => self.toggle(),
            TopicUpdate::IncrementRevision => self.record_revision(),
            TopicUpdate::Edit {
                name,
                revisions,
                links,
            } => {
                if let Some(name) = name {
                    self.name = name;
                }
                if let Some(revisions) = revisions {
                    self.revisions = revisions;
                }
                if let Some(links) = links {
                    self.links = links;
                }
            }
        }
    }
}

/// Mutation applied to a topic by the update operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicUpdate {
    /// Flip the completion flag
    Toggle,

    /// Add one revision pass
    IncrementRevision,

    /// Replace fields; omitted fields keep their current values
    Edit {
        name: Option<String>,
        revisions: Option<u32>,
        links: Option<String>,
    },
}
