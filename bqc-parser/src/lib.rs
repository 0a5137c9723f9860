//! # bqc
//!
//! A parser for the BQC (Bio-Quiz-Compact) quiz format.
//!
//! A BQC document is plain text: a `---` delimited frontmatter block carrying the topic
//! identity, followed by `§` section markers and numbered questions whose text embeds
//! fill-in-the-blank tokens such as `{mitochondria|mitochondrion::organelle}`.
//!
//! File Layout
//!
//! src/bqc
//!   ├── ast          The parsed document (Topic, Section, Question, QuestionContent)
//!   ├── frontmatter  Metadata block extraction and validation
//!   ├── parsing      Line-oriented section/question scanner
//!   ├── inlines      Blank token expansion inside question text
//!   ├── formats      Serializers (json, bqc, treeviz)
//!   ├── answers      Answer checking against parsed blanks
//!   ├── repair       Fallback frontmatter for generated text
//!   ├── loader       Reading sources from disk or memory
//!   └── testing      Fluent assertions and verified sample documents
//!
//! For testing guidelines, see the [testing module](bqc::testing).

pub mod bqc;

pub use bqc::ast::{Blank, Question, QuestionContent, Section, Topic};
pub use bqc::error::{ParseError, ParseResult};
pub use bqc::parsing::parse;
