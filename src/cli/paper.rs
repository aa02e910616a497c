//! Paper CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Tracker;

#[derive(Subcommand)]
pub enum PaperCommands {
    /// Register a new paper
    Add {
        /// Paper code (e.g. "CS 2024"); surrounding whitespace is trimmed
        code: String,
    },

    /// List papers with their topics
    List,

    /// Remove a paper and all of its topics
    Rm {
        /// Paper code; every paper with this code is removed
        code: String,
    },
}

pub fn run(cmd: PaperCommands, output: &Output) -> Result<()> {
    match cmd {
        PaperCommands::Add { code } => add_paper(output, &code),
        PaperCommands::List => list_papers(output),
        PaperCommands::Rm { code } => remove_paper(output, &code),
    }
}

fn add_paper(output: &Output, code: &str) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let paper = tracker.paper_store().create_paper(code)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "code": paper.code }));
    } else {
        output.success(&format!("Created paper: {}", paper.code));
    }

    Ok(())
}

fn list_papers(output: &Output) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let store = tracker.paper_store();
    output.verbose(&format!("reading store at {}", store.path().display()));

    let papers = store.list_papers();

    if output.is_json() {
        output.data(&papers);
    } else if papers.is_empty() {
        println!("No papers");
    } else {
        for paper in &papers {
            println!(
                "[{}] {}/{} completed",
                paper.code,
                paper.completed_count(),
                paper.topics.len()
            );

            for topic in &paper.topics {
                let mark = if topic.completed { "x" } else { " " };
                if topic.links.is_empty() {
                    println!("  [{}] {}. {} (rev {})", mark, topic.id, topic.name, topic.revisions);
                } else {
                    println!(
                        "  [{}] {}. {} (rev {})  {}",
                        mark, topic.id, topic.name, topic.revisions, topic.links
                    );
                }
            }
        }
    }

    Ok(())
}

fn remove_paper(output: &Output, code: &str) -> Result<()> {
    let tracker = Tracker::open_current()?;
    tracker.paper_store().delete_paper(code)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "removed": code.trim() }));
    } else {
        output.success(&format!("Removed paper: {}", code.trim()));
    }

    Ok(())
}
