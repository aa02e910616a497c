//! Domain models for PYQ CLI
//!
//! Contains the core data types without any I/O concerns.

mod paper;
mod topic;

pub use paper::Paper;
pub use topic::{Topic, TopicUpdate};
