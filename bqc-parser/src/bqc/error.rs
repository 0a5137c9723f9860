//! Error types for BQC parsing
//!
//!     Parsing is all-or-nothing: any of these errors aborts the parse and no partial topic is
//!     returned. Everything else the parser meets (stray lines, out-of-order numbers, duplicate
//!     ids) is tolerated.

use std::fmt;

/// Errors that can occur while parsing a BQC document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The frontmatter block is present but cannot be read (unclosed, or not a key/value map)
    MalformedFrontmatter { reason: String },
    /// One or more of `slug`, `title`, `description` is absent or empty
    MissingMetadata { keys: Vec<String> },
    /// A `{...}` token whose answers part holds no usable answer
    InvalidBlank { question_id: String, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedFrontmatter { reason } => {
                write!(f, "Malformed frontmatter: {}", reason)
            }
            ParseError::MissingMetadata { keys } => {
                write!(f, "Missing required metadata: {}", keys.join(", "))
            }
            ParseError::InvalidBlank { question_id, token } => {
                write!(
                    f,
                    "Invalid blank format in question {}: {} (a blank needs at least one answer)",
                    question_id, token
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;
