//! Paper domain model
//!
//! A paper is a named collection of topics, typically one exam's syllabus.
//! Papers keep insertion order, and their topics carry dense positional ids:
//! after any mutation completes, topic ids are exactly `0..len` in order.

use serde::{Deserialize, Serialize};

use super::Topic;

/// A named collection of topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// User-supplied exam code. Uniqueness is not enforced by the store.
    pub code: String,

    /// Ordered topic list; ids mirror positions
    pub topics: Vec<Topic>,
}

impl Paper {
    /// Creates an empty paper
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            topics: Vec::new(),
        }
    }

    /// Appends a new topic at the end of the list, assigning the next id
    pub fn push_topic(&mut self, name: impl Into<String>, links: impl Into<String>) -> &Topic {
        let topic = Topic::new(self.topics.len(), name, links);
        self.topics.push(topic);
        self.topics.last().expect("topic was just pushed")
    }

    /// Returns a mutable reference to the topic at `id`, if in range
    pub fn topic_mut(&mut self, id: usize) -> Option<&mut Topic> {
        self.topics.get_mut(id)
    }

    /// Removes the topic at `id` and reassigns the remaining ids to their
    /// new positions. Returns `None` when `id` is out of range.
    pub fn remove_topic(&mut self, id: usize) -> Option<Topic> {
        if id >= self.topics.len() {
            return None;
        }

        let removed = self.topics.remove(id);
        self.reindex();
        Some(removed)
    }

    /// Number of completed topics
    pub fn completed_count(&self) -> usize {
        self.topics.iter().filter(|t| t.completed).count()
    }

    fn reindex(&mut self) {
        for (position, topic) in self.topics.iter_mut().enumerate() {
            topic.id = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper_with_topics(names: &[&str]) -> Paper {
        let mut paper = Paper::new("CS101");
        for name in names {
            paper.push_topic(*name, "");
        }
        paper
    }

    #[test]
    fn push_topic_assigns_dense_ids() {
        let paper = paper_with_topics(&["a", "b", "c"]);

        let ids: Vec<usize> = paper.topics.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn remove_topic_reindexes_remaining() {
        let mut paper = paper_with_topics(&["a", "b", "c"]);

        let removed = paper.remove_topic(1).unwrap();
        assert_eq!(removed.name, "b");

        let names: Vec<&str> = paper.topics.iter().map(|t| t.name.as_str()).collect();
        let ids: Vec<usize> = paper.topics.iter().map(|t| t.id).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn remove_topic_out_of_range_is_none() {
        let mut paper = paper_with_topics(&["a"]);

        assert!(paper.remove_topic(1).is_none());
        assert_eq!(paper.topics.len(), 1);
    }

    #[test]
    fn completed_count_only_counts_completed() {
        let mut paper = paper_with_topics(&["a", "b", "c"]);
        paper.topic_mut(0).unwrap().toggle();
        paper.topic_mut(2).unwrap().toggle();

        assert_eq!(paper.completed_count(), 2);
    }
}
