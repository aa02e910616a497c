//! Tracker overview (status)

use anyhow::Result;

use super::output::Output;
use crate::storage::Tracker;

/// Show tracker status overview
pub fn status(output: &Output) -> Result<()> {
    let tracker = Tracker::open_current()?;
    let papers = tracker.paper_store().list_papers();

    let total_topics: usize = papers.iter().map(|p| p.topics.len()).sum();
    let completed: usize = papers.iter().map(|p| p.completed_count()).sum();
    let revisions: u64 = papers
        .iter()
        .flat_map(|p| &p.topics)
        .map(|t| u64::from(t.revisions))
        .sum();

    if output.is_json() {
        output.data(&serde_json::json!({
            "papers": papers.len(),
            "topics": {
                "total": total_topics,
                "completed": completed,
                "pending": total_topics - completed,
            },
            "revisions": revisions,
        }));
    } else {
        println!("Tracker Status");
        println!("{}", "=".repeat(40));
        println!();
        println!("Papers: {}", papers.len());
        println!("Topics: {} total", total_topics);
        println!("  [x] Completed: {}", completed);
        println!("  [ ] Pending:   {}", total_topics - completed);
        println!();
        println!("Revision passes: {}", revisions);

        if !papers.is_empty() {
            println!();
            println!("Per paper:");
            for paper in &papers {
                println!(
                    "  {} - {}/{} completed",
                    paper.code,
                    paper.completed_count(),
                    paper.topics.len()
                );
            }
        }
    }

    Ok(())
}
