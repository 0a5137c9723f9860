//! Verified sample documents
//!
//!     The samples live in `bqc-parser/samples/` and are the only BQC sources integration tests
//!     should parse. Each sample is named after what it exercises:
//!
//!         cell-biology          full document: sections, alternates, placeholders,
//!                               multi-line and informational questions
//!         no-sections           questions with no `§` marker (implicit section)
//!         explicit-ids          `[#id]` tags on sections and questions
//!         stray-content         text outside any question, out-of-order numbers
//!         invalid-blank         a blank with no usable answer (parse error)
//!         missing-description   frontmatter without `description` (parse error)
//!         generated-raw         model output without frontmatter (needs repair)

use crate::bqc::ast::Topic;
use crate::bqc::error::ParseError;
use crate::bqc::loader::{DocumentLoader, LoaderError};
use crate::bqc::parsing::ParsedDocument;
use std::fs;
use std::path::PathBuf;

/// Directory holding the sample documents
pub fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Fluent handle on one sample file
pub struct SampleLoader {
    name: String,
}

impl SampleLoader {
    pub fn path(&self) -> PathBuf {
        samples_dir().join(format!("{}.bqc", self.name))
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn loader(&self) -> DocumentLoader {
        DocumentLoader::from_path(self.path())
            .unwrap_or_else(|e| panic!("Failed to load sample '{}': {}", self.name, e))
    }

    /// Parse, panicking on failure
    pub fn parse(&self) -> Topic {
        self.parse_document().topic
    }

    pub fn parse_document(&self) -> ParsedDocument {
        self.loader()
            .parse_document()
            .unwrap_or_else(|e| panic!("Failed to parse sample '{}': {}", self.name, e))
    }

    /// Parse, expecting a parse error
    pub fn parse_err(&self) -> ParseError {
        match self.loader().parse() {
            Ok(_) => panic!("Expected sample '{}' to fail parsing", self.name),
            Err(LoaderError::ParseError(err)) => err,
            Err(err) => panic!("Failed to load sample '{}': {}", self.name, err),
        }
    }
}

/// Macro to generate sample shortcuts
macro_rules! sample_shortcuts {
    ($($name:ident => $file:literal);* $(;)?) => {
        $(
            #[doc = concat!("The `", $file, "` sample")]
            pub fn $name() -> SampleLoader {
                Self::load($file)
            }
        )*
    };
}

/// Interface for loading sample documents
pub struct Samples;

impl Samples {
    /// Start a fluent chain for a sample by file stem
    pub fn load(name: &str) -> SampleLoader {
        SampleLoader {
            name: name.to_string(),
        }
    }

    sample_shortcuts! {
        cell_biology => "cell-biology";
        no_sections => "no-sections";
        explicit_ids => "explicit-ids";
        stray_content => "stray-content";
        invalid_blank => "invalid-blank";
        missing_description => "missing-description";
        generated_raw => "generated-raw";
    }

    /// Stems of every sample on disk, sorted
    pub fn list() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(samples_dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == "bqc"))
                    .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
