//! Canonical BQC writer
//!
//!     Renders a topic back to BQC source. The output is canonical rather than a copy of the
//!     original text:
//!
//!         - Frontmatter values are written as double-quoted YAML strings, required keys first,
//!           then `author`, `version` and the remaining keys in name order.
//!         - Every section gets an explicit `§` marker line, so the implicit section comes back
//!           as a titled one.
//!         - `[#id]` tags are written only where the id differs from the one the parser would
//!           generate.
//!         - Blanks are written as `{a|b}`, adding `::placeholder` unless the placeholder is the
//!           default.
//!
//!     Parsing the rendered text with default options yields a topic equal to the rendered one.

use super::registry::{FormatError, Formatter};
use crate::bqc::ast::{Blank, Question, QuestionContent, Section, Topic};
use crate::bqc::frontmatter::{quote_value, Metadata};
use crate::bqc::inlines::blanks::{ANSWER_SEPARATOR, PLACEHOLDER_SEPARATOR};
use crate::bqc::inlines::DEFAULT_PLACEHOLDER;
use crate::bqc::parsing::ParsedDocument;
use std::fmt::Write;

/// Render `topic` as BQC source, with `metadata` as its frontmatter.
///
/// The topic's own slug, title and description take precedence over the ones in `metadata`.
pub fn render(metadata: &Metadata, topic: &Topic) -> String {
    let mut out = String::new();
    write_frontmatter(&mut out, metadata, topic);
    for (index, section) in topic.sections.iter().enumerate() {
        write_section(&mut out, section, index + 1);
    }
    out
}

fn write_frontmatter(out: &mut String, metadata: &Metadata, topic: &Topic) {
    out.push_str("---\n");
    write_field(out, "slug", &topic.slug);
    write_field(out, "title", &topic.title);
    write_field(out, "description", &topic.description);
    if let Some(author) = &metadata.author {
        write_field(out, "author", author);
    }
    if let Some(version) = &metadata.version {
        write_field(out, "version", version);
    }
    for (key, value) in &metadata.extra {
        write_field(out, key, value);
    }
    out.push_str("---\n");
}

fn write_field(out: &mut String, key: &str, value: &str) {
    let plain_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if plain_key {
        let _ = writeln!(out, "{}: {}", key, quote_value(value));
    } else {
        let _ = writeln!(out, "{}: {}", quote_value(key), quote_value(value));
    }
}

fn write_section(out: &mut String, section: &Section, position: usize) {
    out.push_str("\n§");
    if !section.title.is_empty() {
        out.push(' ');
        out.push_str(&section.title);
    }
    if section.id != Section::auto_id(position) {
        let _ = write!(out, " [#{}]", section.id);
    }
    out.push('\n');

    for question in &section.questions {
        out.push('\n');
        write_question(out, question);
    }
}

fn write_question(out: &mut String, question: &Question) {
    let text = question_source(question);
    let _ = write!(out, "{}. ", question.question_number);
    // A marker line needs at least one character after the separator.
    out.push_str(if text.is_empty() { " " } else { text.as_str() });
    if question.id != format!("q{}", question.question_number) {
        let _ = write!(out, " [#{}]", question.id);
    }
    out.push('\n');
}

fn question_source(question: &Question) -> String {
    question
        .content
        .iter()
        .map(|item| match item {
            QuestionContent::Text { value } => value.clone(),
            QuestionContent::Blank(blank) => blank_token(blank),
        })
        .collect()
}

/// `{a|b}` or `{a|b::placeholder}`
pub fn blank_token(blank: &Blank) -> String {
    let separator = ANSWER_SEPARATOR.to_string();
    let answers = blank.answers.join(separator.as_str());
    if blank.placeholder == DEFAULT_PLACEHOLDER {
        format!("{{{}}}", answers)
    } else {
        format!("{{{}{}{}}}", answers, PLACEHOLDER_SEPARATOR, blank.placeholder)
    }
}

/// Formatter implementation for canonical BQC output
pub struct BqcFormatter;

impl Formatter for BqcFormatter {
    fn name(&self) -> &str {
        "bqc"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        Ok(render(&doc.metadata, &doc.topic))
    }
}
