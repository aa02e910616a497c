//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Tracker management | `init`, `status` |
//! | Paper | Exam paper lifecycle | `paper add`, `paper list`, `paper rm` |
//! | Topic | Study item management | `topic add`, `topic toggle`, `topic revise` |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON, mirroring the store's data shapes
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod paper;
mod query;
mod topic;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
