//! PYQ CLI - A local-first study progress tracker for exam preparation
//!
//! Papers (exam codes) hold ordered lists of topics; each topic tracks
//! completion, revision passes, and reference links. Everything persists to
//! a single line-delimited text file that is reparsed and rewritten in full
//! on every mutation.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Paper, Topic, TopicUpdate};
