//! Frontmatter extraction and metadata validation
//!
//!     A BQC document opens with a metadata block delimited by lines consisting solely of `---`:
//!
//!         ---
//!         slug: cell-biology
//!         title: "Cell Biology"
//!         description: "Organelles and their functions"
//!         author: "Ms. Rivera"
//!         version: "1.0"
//!         ---
//!
//!     The block is read as YAML and flattened into string keys and string values. Scalars are
//!     stringified (so `version: 1.0` reads as "1.0"), nulls count as absent and nested values
//!     are skipped.
//!
//!     `slug`, `title` and `description` are required and must be non-empty after trimming.
//!     Every other key is carried through in [Metadata] without affecting the parsed topic.

use crate::bqc::error::{ParseError, ParseResult};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Keys every document must define, in reporting order.
pub const REQUIRED_KEYS: [&str; 3] = ["slug", "title", "description"];

/// Raw frontmatter fields and the body that follows the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    fields: BTreeMap<String, String>,
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Everything after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Check the required keys and split the fields into [Metadata].
    pub fn into_metadata(self) -> ParseResult<Metadata> {
        let mut fields = self.fields;
        let mut take = |key: &str| {
            fields
                .remove(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let slug = take("slug");
        let title = take("title");
        let description = take("description");
        let author = take("author");
        let version = take("version");

        match (slug, title, description) {
            (Some(slug), Some(title), Some(description)) => Ok(Metadata {
                slug,
                title,
                description,
                author,
                version,
                extra: fields,
            }),
            (slug, title, description) => {
                let present = [slug.is_some(), title.is_some(), description.is_some()];
                let keys = REQUIRED_KEYS
                    .iter()
                    .zip(present)
                    .filter(|(_, present)| !present)
                    .map(|(key, _)| key.to_string())
                    .collect();
                Err(ParseError::MissingMetadata { keys })
            }
        }
    }
}

/// Validated document metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Any other keys, kept opaque.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            author: None,
            version: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Split `source` into frontmatter fields and body.
///
/// Returns `Ok(None)` when the first line is not a `---` delimiter. An opening delimiter with no
/// closing one, or a block that is not a YAML mapping, is a [ParseError::MalformedFrontmatter].
pub fn extract_frontmatter(source: &str) -> ParseResult<Option<Frontmatter<'_>>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first_line, rest) = split_first_line(source);
    if first_line.trim_end() != DELIMITER {
        return Ok(None);
    }

    let mut offset = 0;
    let mut closing = None;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            closing = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((yaml_end, body_start)) = closing else {
        return Err(ParseError::MalformedFrontmatter {
            reason: "opening `---` has no closing delimiter".to_string(),
        });
    };

    let fields = parse_fields(&rest[..yaml_end])?;
    Ok(Some(Frontmatter {
        fields,
        body: &rest[body_start..],
    }))
}

/// Extract the frontmatter and validate the required keys.
///
/// A source without any frontmatter reports all required keys as missing.
pub fn parse_metadata(source: &str) -> ParseResult<(Metadata, &str)> {
    match extract_frontmatter(source)? {
        Some(frontmatter) => {
            let body = frontmatter.body();
            Ok((frontmatter.into_metadata()?, body))
        }
        None => Err(ParseError::MissingMetadata {
            keys: REQUIRED_KEYS.iter().map(|key| key.to_string()).collect(),
        }),
    }
}

/// Write `value` as a double-quoted YAML scalar.
pub fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn split_first_line(source: &str) -> (&str, &str) {
    match source.find('\n') {
        Some(pos) => (&source[..pos], &source[pos + 1..]),
        None => (source, ""),
    }
}

fn parse_fields(yaml: &str) -> ParseResult<BTreeMap<String, String>> {
    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| ParseError::MalformedFrontmatter {
            reason: e.to_string(),
        })?;

    let mapping = match value {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(ParseError::MalformedFrontmatter {
                reason: format!("expected key/value pairs, found {}", describe(&other)),
            })
        }
    };

    let mut fields = BTreeMap::new();
    for (key, value) in mapping {
        let Some(key) = scalar_to_string(&key) else {
            tracing::debug!("skipping frontmatter entry with non-scalar key");
            continue;
        };
        match scalar_to_string(&value) {
            Some(value) => {
                fields.insert(key, value);
            }
            None if value.is_null() => {}
            None => tracing::debug!(key = %key, "skipping non-scalar frontmatter value"),
        }
    }
    Ok(fields)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
