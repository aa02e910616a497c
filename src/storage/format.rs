//! Flat-file topic format
//!
//! Papers and topics live in one line-delimited UTF-8 text file:
//!
//! ```text
//! [PAPER: CS101]
//! Topic1::completed::3::http://a.com,http://b.com
//! Topic2::not_completed::0::
//! ```
//!
//! Lines are trimmed and blank lines skipped anywhere. A `[PAPER:` line
//! opens a new section; every other non-blank line is a topic record whose
//! fields are separated by the two-character delimiter `::`. The parser
//! keeps the format's historical quirks: the revisions field only parses
//! when it is entirely ASCII digits (so `-3` becomes 0), extra fields are
//! ignored, and a topic line before the first paper header is dropped.

use crate::domain::{Paper, Topic};

const PAPER_PREFIX: &str = "[PAPER:";
const DELIMITER: &str = "::";
const STATUS_COMPLETED: &str = "completed";
const STATUS_NOT_COMPLETED: &str = "not_completed";

/// Parses full file contents into an ordered list of papers
pub fn parse(content: &str) -> Vec<Paper> {
    let mut papers = Vec::new();
    let mut current: Option<Paper> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(PAPER_PREFIX) {
            if let Some(paper) = current.take() {
                papers.push(paper);
            }
            let code = rest.strip_suffix(']').unwrap_or(rest).trim();
            current = Some(Paper::new(code));
            continue;
        }

        // Topic record; lines before the first paper header have nowhere
        // to attach and are dropped.
        let Some(paper) = current.as_mut() else {
            continue;
        };

        let mut fields = line.split(DELIMITER);
        let name = fields.next().unwrap_or_default();
        let status = fields.next();
        let revisions = fields.next().map(parse_revisions).unwrap_or(0);
        let links = fields.next().unwrap_or("");

        paper.topics.push(Topic {
            id: paper.topics.len(),
            name: name.to_string(),
            completed: status == Some(STATUS_COMPLETED),
            revisions,
            links: links.to_string(),
        });
    }

    if let Some(paper) = current.take() {
        papers.push(paper);
    }

    papers
}

/// The field parses only when it is non-empty and entirely ASCII digits;
/// anything else (signs, empty, overflow) falls back to 0.
fn parse_revisions(field: &str) -> u32 {
    if !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Serializes papers back to the on-disk text form
pub fn serialize(papers: &[Paper]) -> String {
    let mut out = String::new();

    for paper in papers {
        out.push_str(&format!("[PAPER: {}]\n", paper.code));
        for topic in &paper.topics {
            let status = if topic.completed {
                STATUS_COMPLETED
            } else {
                STATUS_NOT_COMPLETED
            };
            out.push_str(&format!(
                "{}::{}::{}::{}\n",
                topic.name, status, topic.revisions, topic.links
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_single_paper_with_topic() {
        let content = "[PAPER: CS101]\nTopic1::completed::3::http://a.com,http://b.com\n";
        let papers = parse(content);

        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].code, "CS101");
        assert_eq!(
            papers[0].topics,
            vec![Topic {
                id: 0,
                name: "Topic1".to_string(),
                completed: true,
                revisions: 3,
                links: "http://a.com,http://b.com".to_string(),
            }]
        );
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let content = "\n[PAPER: A]\n\nTopic1::not_completed::0::\n\n\n[PAPER: B]\n\n";
        let papers = parse(content);

        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].topics.len(), 1);
        assert!(papers[1].topics.is_empty());
    }

    #[test]
    fn topic_before_any_paper_is_dropped() {
        let papers = parse("Orphan::completed::1::\n[PAPER: A]\nKept::completed::1::\n");

        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].topics.len(), 1);
        assert_eq!(papers[0].topics[0].name, "Kept");
    }

    #[test]
    fn paper_code_strips_one_trailing_bracket_and_trims() {
        let papers = parse("[PAPER:   MATH 2023  ]\n");
        assert_eq!(papers[0].code, "MATH 2023");
    }

    #[test]
    fn status_must_be_exact_literal() {
        let papers = parse("[PAPER: A]\na::completed::0::\nb::COMPLETED::0::\nc::done::0::\n");

        let completed: Vec<bool> = papers[0].topics.iter().map(|t| t.completed).collect();
        assert_eq!(completed, vec![true, false, false]);
    }

    #[test]
    fn missing_fields_default() {
        let papers = parse("[PAPER: A]\nbare-name\nwith-status::completed\n");

        let topics = &papers[0].topics;
        assert_eq!(topics[0].name, "bare-name");
        assert!(!topics[0].completed);
        assert_eq!(topics[0].revisions, 0);
        assert_eq!(topics[0].links, "");
        assert!(topics[1].completed);
    }

    #[test]
    fn revisions_parse_digits_only() {
        let content = "[PAPER: A]\na::x::3::\nb::x::-3::\nc::x::007::\nd::x::1e3::\ne::x::::\n";
        let papers = parse(content);

        let revisions: Vec<u32> = papers[0].topics.iter().map(|t| t.revisions).collect();
        assert_eq!(revisions, vec![3, 0, 7, 0, 0]);
    }

    #[test]
    fn revisions_overflow_falls_back_to_zero() {
        let papers = parse("[PAPER: A]\na::x::99999999999999999999::\n");
        assert_eq!(papers[0].topics[0].revisions, 0);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let papers = parse("[PAPER: A]\na::completed::2::http://x::junk::more\n");

        let topic = &papers[0].topics[0];
        assert!(topic.completed);
        assert_eq!(topic.revisions, 2);
        assert_eq!(topic.links, "http://x");
    }

    #[test]
    fn ids_are_dense_per_paper() {
        let content = "[PAPER: A]\na::x::0::\nb::x::0::\n[PAPER: B]\nc::x::0::\n";
        let papers = parse(content);

        assert_eq!(papers[0].topics[0].id, 0);
        assert_eq!(papers[0].topics[1].id, 1);
        assert_eq!(papers[1].topics[0].id, 0);
    }

    #[test]
    fn serialize_exact_bytes() {
        let mut paper = Paper::new("CS101");
        paper.push_topic("Topic1", "http://a.com,http://b.com");
        paper.topic_mut(0).unwrap().completed = true;
        paper.topic_mut(0).unwrap().revisions = 3;
        paper.push_topic("Topic2", "");

        assert_eq!(
            serialize(&[paper]),
            "[PAPER: CS101]\n\
             Topic1::completed::3::http://a.com,http://b.com\n\
             Topic2::not_completed::0::\n"
        );
    }

    #[test]
    fn parse_is_idempotent_over_serialize() {
        let content = "[PAPER: A]\na::completed::2::x\n[PAPER: B]\nb::not_completed::0::\n";
        let papers = parse(content);

        assert_eq!(serialize(&papers), content);
        assert_eq!(parse(&serialize(&papers)), papers);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_structure(
            code in "[A-Z]{2,6}[0-9]{0,4}",
            names in prop::collection::vec("[A-Za-z0-9]{1,12}", 0..8),
            completed in prop::collection::vec(any::<bool>(), 8),
            revisions in prop::collection::vec(any::<u32>(), 8),
            links in prop::collection::vec("[a-z0-9,./]{0,16}", 8),
        ) {
            let mut paper = Paper::new(code);
            for (i, name) in names.iter().enumerate() {
                paper.topics.push(Topic {
                    id: i,
                    name: name.clone(),
                    completed: completed[i],
                    revisions: revisions[i],
                    links: links[i].clone(),
                });
            }

            let papers = vec![paper];
            prop_assert_eq!(parse(&serialize(&papers)), papers);
        }
    }
}
