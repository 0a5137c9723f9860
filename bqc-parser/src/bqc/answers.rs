//! Answer checking against parsed blanks
//!
//!     Answers are compared after trimming and lowercasing both sides, against every accepted
//!     answer of the blank. An empty (or whitespace only) input never counts as correct.
//!
//!     Hints follow the quiz client: the lowercased first letter of the primary answer, except
//!     for answers of a single character, which would be given away entirely.

use crate::bqc::ast::{Blank, Topic};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Correct,
    Incorrect,
    Unchecked,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationStatus::Correct => "correct",
            ValidationStatus::Incorrect => "incorrect",
            ValidationStatus::Unchecked => "unchecked",
        };
        f.write_str(label)
    }
}

/// Returned when a blank id does not exist in the topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBlank(pub String);

impl fmt::Display for UnknownBlank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No blank with id '{}'", self.0)
    }
}

impl std::error::Error for UnknownBlank {}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether `input` matches any of `answers`.
pub fn check_answer<S: AsRef<str>>(input: &str, answers: &[S]) -> bool {
    let input = normalize(input);
    if input.is_empty() {
        return false;
    }
    answers
        .iter()
        .any(|answer| normalize(answer.as_ref()) == input)
}

/// Status to show for an input field.
pub fn validation_status<S: AsRef<str>>(
    input: &str,
    answers: &[S],
    validated: bool,
) -> ValidationStatus {
    if !validated || input.trim().is_empty() {
        ValidationStatus::Unchecked
    } else if check_answer(input, answers) {
        ValidationStatus::Correct
    } else {
        ValidationStatus::Incorrect
    }
}

/// Letter shown ahead of the input field, if any.
pub fn hint<S: AsRef<str>>(answers: &[S]) -> Option<char> {
    let primary = answers.first()?.as_ref();
    let mut chars = primary.chars();
    let first = chars.next()?;
    chars.next()?;
    first.to_lowercase().next()
}

impl Blank {
    pub fn check(&self, input: &str) -> bool {
        check_answer(input, &self.answers)
    }

    pub fn hint(&self) -> Option<char> {
        hint(&self.answers)
    }
}

/// Check `input` against the blank `blank_id` of `topic`.
pub fn check_blank(topic: &Topic, blank_id: &str, input: &str) -> Result<bool, UnknownBlank> {
    topic
        .find_blank(blank_id)
        .map(|blank| blank.check(input))
        .ok_or_else(|| UnknownBlank(blank_id.to_string()))
}
