//! Question content items
//!
//!     A question's text is stored as an ordered sequence of [QuestionContent] items: literal
//!     text runs interleaved with blanks. Renderers walk the sequence in order, printing text and
//!     turning each blank into an input field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One item of a question's content sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionContent {
    /// A literal run of display text. May contain embedded newlines.
    Text { value: String },
    /// A fill-in-the-blank slot.
    Blank(Blank),
}

impl QuestionContent {
    pub fn text(value: impl Into<String>) -> Self {
        QuestionContent::Text {
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            QuestionContent::Text { value } => Some(value),
            QuestionContent::Blank(_) => None,
        }
    }

    pub fn as_blank(&self) -> Option<&Blank> {
        match self {
            QuestionContent::Blank(blank) => Some(blank),
            QuestionContent::Text { .. } => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, QuestionContent::Blank(_))
    }
}

/// A fill-in-the-blank slot with its accepted answers
///
/// `answers` is never empty. The first answer is the canonical one: hints and answer reveals
/// are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blank {
    pub id: String,
    pub answers: Vec<String>,
    pub placeholder: String,
}

impl Blank {
    /// The canonical answer.
    pub fn primary_answer(&self) -> &str {
        self.answers.first().map(String::as_str).unwrap_or_default()
    }

    /// Alternates accepted besides the primary answer.
    pub fn alternates(&self) -> &[String] {
        self.answers.get(1..).unwrap_or_default()
    }
}

/// Canonical token form, always spelling out the placeholder: `{a|b::hint}`
impl fmt::Display for Blank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}::{}}}", self.answers.join("|"), self.placeholder)
    }
}
