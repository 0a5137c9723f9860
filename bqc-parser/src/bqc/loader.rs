//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading BQC source text from files
//! or strings and parsing it. This is used by both production code and tests.
//!
//! # Example
//!
//! ```rust
//! use bqc_parser::bqc::loader::DocumentLoader;
//!
//! // From file
//! let topic = DocumentLoader::from_path("cells.bqc").unwrap().parse().unwrap();
//!
//! // From generated text, patching broken frontmatter first
//! let doc = DocumentLoader::from_string(generated)
//!     .repaired("cells.pdf", &RepairOptions::default())
//!     .parse_document()
//!     .unwrap();
//! ```

use crate::bqc::ast::Topic;
use crate::bqc::error::ParseError;
use crate::bqc::parsing::{parse_document_with, ParseOptions, ParsedDocument};
use crate::bqc::repair::{repair, RepairOptions};
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(std::io::Error),
    /// Parsing error
    ParseError(ParseError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(err) => write!(f, "IO error: {}", err),
            LoaderError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::IoError(err) => Some(err),
            LoaderError::ParseError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err)
    }
}

impl From<ParseError> for LoaderError {
    fn from(err: ParseError) -> Self {
        LoaderError::ParseError(err)
    }
}

/// Holds BQC source text and the options to parse it with
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
    options: ParseOptions,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded bqc source");
        Ok(Self::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            options: ParseOptions::default(),
        }
    }

    /// Use custom parse options
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the frontmatter repair over the source before parsing.
    ///
    /// `file_name` is the name of the document the text was generated from; it seeds the title
    /// when none can be recovered from the text itself.
    pub fn repaired(mut self, file_name: &str, options: &RepairOptions) -> Self {
        let repaired = repair(&self.source, file_name, options);
        if repaired.was_repaired() {
            self.source = repaired.into_source();
        }
        self
    }

    /// The (possibly repaired) source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// Parse into a [Topic].
    pub fn parse(&self) -> Result<Topic, LoaderError> {
        Ok(self.parse_document()?.topic)
    }

    /// Parse, keeping the metadata.
    pub fn parse_document(&self) -> Result<ParsedDocument, LoaderError> {
        Ok(parse_document_with(&self.source, &self.options)?)
    }
}
