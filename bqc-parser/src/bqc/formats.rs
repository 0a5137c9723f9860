//! Output format implementations for parsed documents
//!
//! This module contains the serializers a [ParsedDocument](crate::bqc::parsing::ParsedDocument)
//! can be written to:
//! - json: the persisted shape of the topic
//! - bqc: canonical BQC source text
//! - treeviz: a one line per node summary tree

pub mod bqc;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use bqc::{render, BqcFormatter};
pub use json::{from_json, to_json, to_json_pretty, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
