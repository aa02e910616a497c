//! Topic CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::TopicUpdate;
use crate::storage::Tracker;

#[derive(Subcommand)]
pub enum TopicCommands {
    /// Add a topic to a paper
    Add {
        /// Paper code
        paper: String,

        /// Topic name
        name: String,

        /// Comma-separated reference links
        #[arg(long, default_value = "")]
        links: String,
    },

    /// Flip a topic's completion state
    Toggle {
        /// Paper code
        paper: String,

        /// Topic id (position within the paper)
        id: usize,
    },

    /// Record one revision pass
    Revise {
        /// Paper code
        paper: String,

        /// Topic id
        id: usize,
    },

    /// Edit a topic's fields; omitted flags keep current values
    Edit {
        /// Paper code
        paper: String,

        /// Topic id
        id: usize,

        /// New topic name
        #[arg(long)]
        name: Option<String>,

        /// New revision count
        #[arg(long)]
        revisions: Option<u32>,

        /// New links
        #[arg(long)]
        links: Option<String>,
    },

    /// Remove a topic (later topics shift down by one id)
    Rm {
        /// Paper code
        paper: String,

        /// Topic id
        id: usize,
    },
}

pub fn run(cmd: TopicCommands, output: &Output) -> Result<()> {
    match cmd {
        TopicCommands::Add { paper, name, links } => add_topic(output, &paper, &name, &links),
        TopicCommands::Toggle { paper, id } => toggle_topic(output, &paper, id),
        TopicCommands::Revise { paper, id } => revise_topic(output, &paper, id),
        TopicCommands::Edit {
            paper,
            id,
            name,
            revisions,
            links,
        } => edit_topic(output, &paper, id, name, revisions, links),
        TopicCommands::Rm { paper, id } => remove_topic(output, &paper, id),
    }
}

fn add_topic(output: &Output, paper: &str, name: &str, links: &str) -> Result<()> {
    let tracker = Tracker::open_current()?;

    // Name and links are trimmed at this boundary; the store keeps them verbatim
    let topic = tracker
        .paper_store()
        .create_topic(paper, name.trim(), links.trim())?;

    if output.is_json() {
        output.data(&topic);
    } else {
        output.success(&format!(
            "Added topic {} to {}: {}",
            topic.id,
            paper.trim(),
            topic.name
        ));
    }

    Ok(())
}

fn toggle_topic(output: &Output, paper: &str, id: usize) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let topic = tracker
        .paper_store()
        .update_topic(paper, id, TopicUpdate::Toggle)?;

    if output.is_json() {
        output.data(&topic);
    } else {
        let state = if topic.completed { "completed" } else { "pending" };
        output.success(&format!("Marked '{}' {}", topic.name, state));
    }

    Ok(())
}

fn revise_topic(output: &Output, paper: &str, id: usize) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let topic = tracker
        .paper_store()
        .update_topic(paper, id, TopicUpdate::IncrementRevision)?;

    if output.is_json() {
        output.data(&topic);
    } else {
        output.success(&format!(
            "Recorded revision {} for '{}'",
            topic.revisions, topic.name
        ));
    }

    Ok(())
}

fn edit_topic(
    output: &Output,
    paper: &str,
    id: usize,
    name: Option<String>,
    revisions: Option<u32>,
    links: Option<String>,
) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let topic = tracker.paper_store().update_topic(
        paper,
        id,
        TopicUpdate::Edit {
            name,
            revisions,
            links,
        },
    )?;

    if output.is_json() {
        output.data(&topic);
    } else {
        output.success(&format!("Updated topic {}: {}", topic.id, topic.name));
    }

    Ok(())
}

fn remove_topic(output: &Output, paper: &str, id: usize) -> Result<()> {
    let tracker = Tracker::open_current()?;
    tracker.paper_store().delete_topic(paper, id)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "removed": id, "paper": paper.trim() }));
    } else {
        output.success(&format!("Removed topic {} from {}", id, paper.trim()));
    }

    Ok(())
}
