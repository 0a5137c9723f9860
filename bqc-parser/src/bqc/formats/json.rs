//! JSON serialization of topics
//!
//! The JSON shape is the one topics are persisted in: camelCase `questionNumber` and content
//! items tagged with `"type": "text"` or `"type": "blank"`.

use super::registry::{FormatError, Formatter};
use crate::bqc::ast::Topic;
use crate::bqc::parsing::ParsedDocument;

pub fn to_json(topic: &Topic) -> serde_json::Result<String> {
    serde_json::to_string(topic)
}

pub fn to_json_pretty(topic: &Topic) -> serde_json::Result<String> {
    serde_json::to_string_pretty(topic)
}

/// Read a topic back from its persisted JSON form.
pub fn from_json(json: &str) -> serde_json::Result<Topic> {
    serde_json::from_str(json)
}

/// Formatter implementation for JSON output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        let json = if self.pretty {
            to_json_pretty(&doc.topic)
        } else {
            to_json(&doc.topic)
        };
        json.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
