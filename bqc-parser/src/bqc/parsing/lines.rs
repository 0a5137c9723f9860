//! Line Classification
//!
//!     Every body line falls into exactly one class. Classification looks at the current line
//!     only; what a line means in context (continuation, stray text) is decided by the
//!     [scanner](super::scanner).
//!
//!     | Class    | Pattern                                  |
//!     |----------|------------------------------------------|
//!     | Section  | `§ <title> [#id]`   (id optional)        |
//!     | Question | `<digits>. <text> [#id]`   (id optional) |
//!     | Blank    | empty or whitespace only                 |
//!     | Content  | anything else                            |
//!
//!     Markers must start at column zero: an indented `2. foo` is content, which lets question
//!     bodies contain numbered sub-lists.
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading symbol of a section line.
pub const SECTION_MARKER: char = '§';

static SECTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^§\s*(?P<title>.*?)(?:\s*\[#(?P<id>[^\]]+)\])?\s*$")
        .expect("section pattern compiles")
});

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<number>[0-9]+)\.\s+(?P<text>.+?)(?:\s*\[#(?P<id>[^\]]+)\]\s*)?$")
        .expect("question pattern compiles")
});

static TRAILING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\[#[^\]]+\]\s*$").expect("trailing id pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine<'a> {
    Section {
        title: &'a str,
        id: Option<&'a str>,
    },
    Question {
        number: u64,
        text: &'a str,
        id: Option<&'a str>,
    },
    Blank,
    Content(&'a str),
}

/// Determine the class of a single body line (without its line terminator).
pub fn classify_line(line: &str) -> BodyLine<'_> {
    if line.trim().is_empty() {
        return BodyLine::Blank;
    }

    if line.starts_with(SECTION_MARKER) {
        if let Some(caps) = SECTION_LINE.captures(line) {
            let title = caps.name("title").map_or("", |m| m.as_str().trim());
            let id = caps.name("id").map(|m| m.as_str());
            return BodyLine::Section { title, id };
        }
    }

    if let Some(caps) = QUESTION_LINE.captures(line) {
        let number = caps.name("number").and_then(|m| m.as_str().parse::<u64>().ok());
        let text = caps.name("text").map(|m| m.as_str());
        if let (Some(number), Some(text)) = (number, text) {
            let id = caps.name("id").map(|m| m.as_str());
            return BodyLine::Question { number, text, id };
        }
        tracing::debug!(line, "question number out of range, treating line as content");
    }

    BodyLine::Content(line)
}

/// Remove one trailing `[#id]` tag (and surrounding whitespace) from question text.
pub fn strip_trailing_id(text: &str) -> &str {
    match TRAILING_ID.find(text) {
        Some(tag) => &text[..tag.start()],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_section() {
        assert_eq!(
            classify_line("§ Cell Biology"),
            BodyLine::Section {
                title: "Cell Biology",
                id: None
            }
        );
        assert_eq!(
            classify_line("§ Cell Biology [#cells]"),
            BodyLine::Section {
                title: "Cell Biology",
                id: Some("cells")
            }
        );
        assert_eq!(
            classify_line("§Genetics   [#gen] "),
            BodyLine::Section {
                title: "Genetics",
                id: Some("gen")
            }
        );
    }

    #[test]
    fn test_classify_bare_section_marker() {
        assert_eq!(
            classify_line("§"),
            BodyLine::Section {
                title: "",
                id: None
            }
        );
    }

    #[test]
    fn test_classify_question() {
        assert_eq!(
            classify_line("12. The {nucleus} holds DNA."),
            BodyLine::Question {
                number: 12,
                text: "The {nucleus} holds DNA.",
                id: None
            }
        );
        assert_eq!(
            classify_line("3. What is ATP? [#atp]"),
            BodyLine::Question {
                number: 3,
                text: "What is ATP?",
                id: Some("atp")
            }
        );
    }

    #[test]
    fn test_question_requires_space_after_period() {
        assert_eq!(classify_line("1.5 is a number"), BodyLine::Content("1.5 is a number"));
        assert_eq!(classify_line("1."), BodyLine::Content("1."));
    }

    #[test]
    fn test_indented_markers_are_content() {
        assert_eq!(classify_line("   2. sub item"), BodyLine::Content("   2. sub item"));
        assert_eq!(classify_line(" § not a section"), BodyLine::Content(" § not a section"));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), BodyLine::Blank);
        assert_eq!(classify_line(" \t "), BodyLine::Blank);
    }

    #[test]
    fn test_strip_trailing_id() {
        assert_eq!(strip_trailing_id("text [#a]"), "text");
        assert_eq!(strip_trailing_id("text [#a]  "), "text");
        assert_eq!(strip_trailing_id("text [#a] more"), "text [#a] more");
        assert_eq!(strip_trailing_id("text"), "text");
    }
}
