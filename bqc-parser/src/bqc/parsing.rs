//! Parsing BQC documents
//!
//!     Parsing runs in three steps:
//!
//!         1. Frontmatter: the `---` block is split off and the required metadata validated
//!            (see [frontmatter](crate::bqc::frontmatter)).
//!         2. Line scan: the body is scanned line by line, opening sections at `§` markers and
//!            questions at `<digits>. ` markers, and buffering continuation lines
//!            (see [scanner]).
//!         3. Blank expansion: each finished question's text is split into text runs and blanks
//!            (see [inlines](crate::bqc::inlines)).
//!
//!     The parse is all-or-nothing. All scan state lives in a value owned by the parse call, so
//!     concurrent parses need no coordination.

pub mod lines;
pub mod scanner;

use crate::bqc::ast::Topic;
use crate::bqc::error::ParseResult;
use crate::bqc::frontmatter::{parse_metadata, Metadata};
use crate::bqc::inlines::DEFAULT_PLACEHOLDER;
use serde::Serialize;

pub use scanner::scan_body;

/// Title of the section opened for questions that precede any `§` marker.
pub const DEFAULT_SECTION_TITLE: &str = "Questions";

/// Knobs for the parts of the grammar that have defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Placeholder for blanks that do not spell one out with `::`.
    pub default_placeholder: String,
    /// Title of the implicit section.
    pub default_section_title: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_section_title: DEFAULT_SECTION_TITLE.to_string(),
        }
    }
}

/// A parsed document: the validated metadata alongside the topic built from the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub metadata: Metadata,
    pub topic: Topic,
}

/// Parse BQC source text into a [Topic].
pub fn parse(source: &str) -> ParseResult<Topic> {
    parse_document(source).map(|document| document.topic)
}

/// Parse BQC source text, keeping the full metadata.
pub fn parse_document(source: &str) -> ParseResult<ParsedDocument> {
    parse_document_with(source, &ParseOptions::default())
}

/// Parse BQC source text with custom [ParseOptions].
pub fn parse_document_with(source: &str, options: &ParseOptions) -> ParseResult<ParsedDocument> {
    let (metadata, body) = parse_metadata(source)?;
    let sections = scan_body(body, options)?;

    let topic = Topic {
        slug: metadata.slug.clone(),
        title: metadata.title.clone(),
        description: metadata.description.clone(),
        sections,
    };
    tracing::debug!(
        slug = %topic.slug,
        sections = topic.sections.len(),
        "parsed bqc document"
    );

    Ok(ParsedDocument { metadata, topic })
}
