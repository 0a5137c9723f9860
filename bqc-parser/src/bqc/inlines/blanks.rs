//! Blank token expansion
//!
//!     The expander walks the question text left to right. Literal spans between tokens become
//!     `Text` items (empty spans are dropped), each token becomes a `Blank`:
//!
//!         - The interior is split on `::` into an answers part and a placeholder part. Only the
//!           segment right after the first `::` is the placeholder; anything past a second `::`
//!           is dropped. The placeholder is trimmed and kept even when empty; the default is
//!           used only when there is no `::` at all.
//!         - The answers part is split on `|`; each candidate is trimmed and empties dropped.
//!         - A token left with no answers aborts the parse with [ParseError::InvalidBlank].
//!         - Blank ids are `<questionId>-blank-<k>`, k counting from zero per question.
//!
//!     `{}` never matches (the interior must be non-empty) and stays literal text, as does any
//!     unbalanced brace.

use crate::bqc::ast::{Blank, QuestionContent};
use crate::bqc::error::{ParseError, ParseResult};
use crate::bqc::parsing::ParseOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder for blanks that do not specify one.
pub const DEFAULT_PLACEHOLDER: &str = "...";

pub const PLACEHOLDER_SEPARATOR: &str = "::";
pub const ANSWER_SEPARATOR: char = '|';

static BLANK_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]+\}").expect("blank token pattern compiles"));

/// Split question text into text runs and blanks.
pub fn expand_blanks(
    text: &str,
    question_id: &str,
    options: &ParseOptions,
) -> ParseResult<Vec<QuestionContent>> {
    let mut content = Vec::new();
    let mut cursor = 0;

    for (index, token) in BLANK_TOKEN.find_iter(text).enumerate() {
        push_text(&mut content, &text[cursor..token.start()]);
        let blank = parse_blank(token.as_str(), question_id, index, options)?;
        content.push(QuestionContent::Blank(blank));
        cursor = token.end();
    }
    push_text(&mut content, &text[cursor..]);

    Ok(content)
}

fn push_text(content: &mut Vec<QuestionContent>, span: &str) {
    if !span.is_empty() {
        content.push(QuestionContent::text(span));
    }
}

/// Parse a raw `{...}` token into a blank.
fn parse_blank(
    token: &str,
    question_id: &str,
    index: usize,
    options: &ParseOptions,
) -> ParseResult<Blank> {
    let interior = &token[1..token.len() - 1];

    let mut parts = interior.split(PLACEHOLDER_SEPARATOR);
    let answers_part = parts.next().unwrap_or_default();
    let placeholder = match parts.next() {
        Some(placeholder) => placeholder.trim().to_string(),
        None => options.default_placeholder.clone(),
    };

    let answers: Vec<String> = answers_part
        .split(ANSWER_SEPARATOR)
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .map(String::from)
        .collect();

    if answers.is_empty() {
        return Err(ParseError::InvalidBlank {
            question_id: question_id.to_string(),
            token: token.to_string(),
        });
    }

    Ok(Blank {
        id: format!("{}-blank-{}", question_id, index),
        answers,
        placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> ParseResult<Vec<QuestionContent>> {
        expand_blanks(text, "q1", &ParseOptions::default())
    }

    fn blank(id: &str, answers: &[&str], placeholder: &str) -> QuestionContent {
        QuestionContent::Blank(Blank {
            id: id.to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            placeholder: placeholder.to_string(),
        })
    }

    #[test]
    fn test_single_answer_defaults_placeholder() {
        assert_eq!(
            expand("{answer}").unwrap(),
            vec![blank("q1-blank-0", &["answer"], "...")]
        );
    }

    #[test]
    fn test_alternates_and_placeholder() {
        assert_eq!(
            expand("{cat|kitten::animal}").unwrap(),
            vec![blank("q1-blank-0", &["cat", "kitten"], "animal")]
        );
    }

    #[test]
    fn test_text_around_blanks() {
        assert_eq!(
            expand("The {mitochondria} is the powerhouse.").unwrap(),
            vec![
                QuestionContent::text("The "),
                blank("q1-blank-0", &["mitochondria"], "..."),
                QuestionContent::text(" is the powerhouse."),
            ]
        );
    }

    #[test]
    fn test_adjacent_blanks_have_no_empty_text() {
        assert_eq!(
            expand("{a}{b}").unwrap(),
            vec![
                blank("q1-blank-0", &["a"], "..."),
                blank("q1-blank-1", &["b"], "..."),
            ]
        );
    }

    #[test]
    fn test_no_blanks_is_single_text() {
        assert_eq!(
            expand("Explain osmosis.\nUse an example.").unwrap(),
            vec![QuestionContent::text("Explain osmosis.\nUse an example.")]
        );
    }

    #[test]
    fn test_empty_text_has_no_content() {
        assert!(expand("").unwrap().is_empty());
    }

    #[test]
    fn test_answers_are_trimmed_and_empties_dropped() {
        assert_eq!(
            expand("{ cat | | kitten ::  small animal }").unwrap(),
            vec![blank("q1-blank-0", &["cat", "kitten"], "small animal")]
        );
    }

    #[test]
    fn test_empty_placeholder_is_kept() {
        assert_eq!(
            expand("{cat::}").unwrap(),
            vec![blank("q1-blank-0", &["cat"], "")]
        );
        assert_eq!(
            expand("{cat::   }").unwrap(),
            vec![blank("q1-blank-0", &["cat"], "")]
        );
    }

    #[test]
    fn test_placeholder_stops_at_second_separator() {
        assert_eq!(
            expand("{ratio::a::b}").unwrap(),
            vec![blank("q1-blank-0", &["ratio"], "a")]
        );
    }

    #[test]
    fn test_whitespace_only_alternates_fail() {
        let err = expand("Pick {   |  } now").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidBlank {
                question_id: "q1".to_string(),
                token: "{   |  }".to_string(),
            }
        );
    }

    #[test]
    fn test_placeholder_only_fails() {
        assert!(matches!(
            expand("{::hint}"),
            Err(ParseError::InvalidBlank { .. })
        ));
    }

    #[test]
    fn test_empty_braces_stay_literal() {
        assert_eq!(
            expand("set {} is empty").unwrap(),
            vec![QuestionContent::text("set {} is empty")]
        );
    }

    #[test]
    fn test_nested_brace_matches_innermost() {
        assert_eq!(
            expand("{a{b}").unwrap(),
            vec![
                QuestionContent::text("{a"),
                blank("q1-blank-0", &["b"], "..."),
            ]
        );
    }

    #[test]
    fn test_custom_default_placeholder() {
        let options = ParseOptions {
            default_placeholder: "___".to_string(),
            ..ParseOptions::default()
        };
        let content = expand_blanks("{x}", "intro", &options).unwrap();
        assert_eq!(content, vec![blank("intro-blank-0", &["x"], "___")]);
    }
}
