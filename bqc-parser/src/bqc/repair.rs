//! Frontmatter repair for generated BQC text
//!
//!     Model output does not always open with a well-formed metadata block: the block may be
//!     missing, incomplete, wrapped in quotes, or arrive as an escaped string literal
//!     (`'yaml\n' + ...`). Before such text reaches the parser, [repair] rebuilds the frontmatter
//!     from whatever it can recover:
//!
//!         1. Title: the first `title:`, `topic:`, `unit N:` or `quiz:` line; else the source
//!            file name without extension, with `_`/`-` turned into spaces and words
//!            capitalized; else the configured fallback.
//!         2. Slug: the title lowercased, stripped to `[a-z0-9 -]`, whitespace runs turned into
//!            `-`, cut to `max_slug_len` characters; else the fallback slug.
//!         3. Body: any leading `yaml\n` marker, the first broken `---` block, wrapping quotes,
//!            literal `\n` escapes and trailing `+` concatenation operators are removed.
//!
//!     Text that already opens with `---` and mentions `slug:`, `title:` and `description:` is
//!     returned untouched; the parser still validates it.

use crate::bqc::frontmatter::quote_value;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?i)title:[ \t]*"?([^"\n]+)"?"#,
        r"(?i)topic:[ \t]*([^\n]+)",
        r"(?i)\bunit[ \t]*\d*:?[ \t]*([^\n]+)",
        r"(?i)quiz:[ \t]*([^\n]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("title pattern compiles"))
    .collect()
});

static YAML_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)^['"]?yaml\\n['"]?\s*\+?\s*"#).expect("prefix pattern compiles"));
static BROKEN_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^---.*?---\s*").expect("block pattern compiles"));
static LEADING_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*['"]\s*"#).expect("leading quote pattern compiles"));
static TRAILING_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s*['"]\s*$"#).expect("trailing quote pattern compiles"));
static TRAILING_PLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t]*\+[ \t]*$").expect("plus pattern compiles"));
static SLUG_INVALID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug pattern compiles"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static FILE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("extension pattern compiles"));

/// Values written into rebuilt frontmatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOptions {
    pub fallback_title: String,
    pub fallback_slug: String,
    pub description: String,
    pub author: String,
    pub version: String,
    pub max_slug_len: usize,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            fallback_title: "Educational Quiz".to_string(),
            fallback_slug: "generated-quiz".to_string(),
            description: "Educational quiz generated from PDF content".to_string(),
            author: "AI Generated".to_string(),
            version: "1.0".to_string(),
            max_slug_len: 50,
        }
    }
}

/// Outcome of [repair]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repaired<'a> {
    /// The text already carried usable frontmatter.
    Unchanged(&'a str),
    /// New frontmatter was prepended to the cleaned body.
    Rebuilt {
        source: String,
        title: String,
        slug: String,
    },
}

impl<'a> Repaired<'a> {
    pub fn was_repaired(&self) -> bool {
        matches!(self, Repaired::Rebuilt { .. })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Repaired::Unchanged(source) => source,
            Repaired::Rebuilt { source, .. } => source,
        }
    }

    pub fn into_source(self) -> String {
        match self {
            Repaired::Unchanged(source) => source.to_string(),
            Repaired::Rebuilt { source, .. } => source,
        }
    }
}

/// Whether `text` lacks the frontmatter the parser requires.
pub fn needs_repair(text: &str) -> bool {
    !text.trim().starts_with("---")
        || !text.contains("slug:")
        || !text.contains("title:")
        || !text.contains("description:")
}

/// Rebuild the frontmatter of generated text when it is missing or incomplete.
pub fn repair<'a>(text: &'a str, file_name: &str, options: &RepairOptions) -> Repaired<'a> {
    if !needs_repair(text) {
        return Repaired::Unchanged(text);
    }

    let title = extract_title(text)
        .or_else(|| title_from_file_name(file_name))
        .unwrap_or_else(|| options.fallback_title.clone());
    let slug = slugify(&title, options.max_slug_len).unwrap_or_else(|| options.fallback_slug.clone());

    let frontmatter = format!(
        "---\nslug: {}\ntitle: {}\ndescription: {}\nauthor: {}\nversion: {}\n---\n\n",
        slug,
        quote_value(&title),
        quote_value(&options.description),
        quote_value(&options.author),
        quote_value(&options.version),
    );
    let source = frontmatter + &clean_body(text);

    tracing::warn!(title = %title, slug = %slug, "generated text lacked frontmatter, rebuilt it");
    Repaired::Rebuilt {
        source,
        title,
        slug,
    }
}

fn extract_title(text: &str) -> Option<String> {
    TITLE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// `cell_biology-notes.pdf` becomes `Cell Biology Notes`.
fn title_from_file_name(file_name: &str) -> Option<String> {
    let stem = FILE_EXTENSION.replace(file_name, "");
    let words: Vec<String> = stem
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a slug from a title, `None` when nothing usable is left.
pub fn slugify(title: &str, max_len: usize) -> Option<String> {
    let lowered = title.to_lowercase();
    let kept = SLUG_INVALID.replace_all(&lowered, "");
    let dashed = WHITESPACE_RUN.replace_all(kept.trim(), "-");
    let slug: String = dashed.chars().take(max_len).collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

fn clean_body(text: &str) -> String {
    let body = YAML_PREFIX.replace(text, "");
    let body = BROKEN_BLOCK.replace(&body, "");
    let body = LEADING_QUOTE.replace(&body, "");
    let body = TRAILING_QUOTE.replace(&body, "");
    let body = body.replace("\\n", "\n");
    let body = TRAILING_PLUS.replace_all(&body, "");
    body.trim().to_string()
}
