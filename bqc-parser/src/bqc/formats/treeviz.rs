//! Treeviz formatter for parsed topics
//!
//! Treeviz is a one line per node view of a topic, meant for quickly scanning what the parser
//! made of a document. Nesting is drawn with box connectors, and every label is truncated to
//! 30 characters.
//!
//! Example:
//!
//!   ⧉ Cell Biology
//!   ├─ § Organelles
//!   │ ├─ ¶ 1. The ___ is the powerhouse o...
//!   │ │ └─ ◦ mitochondria | mitochondrion
//!   │ └─ ¶ 2. Describe osmosis.
//!   └─ § Genetics
//!
//! Icons
//!     Topic: ⧉
//!     Section: §
//!     Question: ¶
//!     Blank: ◦

use super::registry::{FormatError, Formatter};
use crate::bqc::ast::{Blank, Question, Section, Topic};
use crate::bqc::parsing::ParsedDocument;
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

/// Stand-in for blanks in question labels.
const BLANK_FILL: &str = "___";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Topic,
    Section,
    Question,
    Blank,
}

struct Node {
    kind: NodeKind,
    label: String,
    id: Option<String>,
    children: Vec<Node>,
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Topic => "⧉",
        NodeKind::Section => "§",
        NodeKind::Question => "¶",
        NodeKind::Blank => "◦",
    }
}

fn topic_node(topic: &Topic) -> Node {
    Node {
        kind: NodeKind::Topic,
        label: topic.title.clone(),
        id: Some(topic.slug.clone()),
        children: topic.sections.iter().map(section_node).collect(),
    }
}

fn section_node(section: &Section) -> Node {
    Node {
        kind: NodeKind::Section,
        label: section.title.clone(),
        id: Some(section.id.clone()),
        children: section.questions.iter().map(question_node).collect(),
    }
}

fn question_node(question: &Question) -> Node {
    let text = question
        .display_text(BLANK_FILL)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    Node {
        kind: NodeKind::Question,
        label: format!("{}. {}", question.question_number, text),
        id: Some(question.id.clone()),
        children: question.blanks().map(blank_node).collect(),
    }
}

fn blank_node(blank: &Blank) -> Node {
    Node {
        kind: NodeKind::Blank,
        label: blank.answers.join(" | "),
        id: Some(blank.id.clone()),
        children: Vec::new(),
    }
}

fn node_line(node: &Node, show_ids: bool) -> String {
    let icon = get_icon(node.kind);
    let label = truncate(&node.label, LABEL_WIDTH);
    match (&node.id, show_ids) {
        (Some(id), true) => format!("{} {} [{}]", icon, label, id),
        _ => format!("{} {}", icon, label),
    }
}

fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_ids: bool,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{}{} {}\n", prefix, connector, node_line(node, show_ids)));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        output.push_str(&format_node(child, &child_prefix, i, child_count, show_ids));
    }

    output
}

fn format_topic(topic: &Topic, show_ids: bool) -> String {
    let root = topic_node(topic);
    let mut output = format!("{}\n", node_line(&root, show_ids));

    let child_count = root.children.len();
    for (i, child) in root.children.iter().enumerate() {
        output.push_str(&format_node(child, "", i, child_count, show_ids));
    }

    output
}

pub fn to_treeviz_str(topic: &Topic) -> String {
    to_treeviz_str_with_params(topic, &HashMap::new())
}

/// Supported params: `show-ids` (`"true"` appends each node's id in brackets).
pub fn to_treeviz_str_with_params(topic: &Topic, params: &HashMap<String, String>) -> String {
    let show_ids = params
        .get("show-ids")
        .map(|v| v != "false")
        .unwrap_or(false);

    format_topic(topic, show_ids)
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(&doc.topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bqc::parsing::parse;

    const SOURCE: &str = "---\nslug: cells\ntitle: Cell Biology\ndescription: d\n---\n\
                          § Organelles\n\
                          1. The {mitochondria|mitochondrion} is the powerhouse of the cell.\n\
                          2. Describe\n   osmosis.\n\
                          § Genetics\n";

    #[test]
    fn test_tree_shape() {
        let topic = parse(SOURCE).unwrap();
        assert_eq!(
            to_treeviz_str(&topic),
            "⧉ Cell Biology\n\
             ├─ § Organelles\n\
             │ ├─ ¶ 1. The ___ is the powerhouse o...\n\
             │ │ └─ ◦ mitochondria | mitochondrion\n\
             │ └─ ¶ 2. Describe osmosis.\n\
             └─ § Genetics\n"
        );
    }

    #[test]
    fn test_show_ids() {
        let topic = parse(SOURCE).unwrap();
        let params = HashMap::from([("show-ids".to_string(), "true".to_string())]);
        let output = to_treeviz_str_with_params(&topic, &params);
        assert!(output.starts_with("⧉ Cell Biology [cells]\n"));
        assert!(output.contains("◦ mitochondria | mitochondrion [q1-blank-0]"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
