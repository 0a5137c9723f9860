//! Section/question scanner
//!
//!     A single left-to-right pass over the body lines. The scanner keeps three pieces of state:
//!     the open section, the open question, and the question's buffered text lines.
//!
//!     | Line      | Question open                   | No question open      |
//!     |-----------|---------------------------------|-----------------------|
//!     | Section   | flush question, close section, open section     ||
//!     | Question  | flush question, open question (implicit section if needed) ||
//!     | Content   | buffer line                     | ignore                |
//!     | Blank     | buffer line                     | ignore                |
//!
//!     Flushing joins the buffered lines with `\n`, trims the result, drops a trailing `[#id]`
//!     and expands the blanks. Sections only reach the output when they are closed, either by
//!     the next section marker or by the end of input, so a body without markers yields no
//!     sections at all.

use super::lines::{classify_line, strip_trailing_id, BodyLine};
use super::ParseOptions;
use crate::bqc::ast::{Question, Section};
use crate::bqc::error::{ParseError, ParseResult};
use crate::bqc::inlines::expand_blanks;
use std::collections::HashSet;

/// Scan a document body (the text after the frontmatter) into sections.
pub fn scan_body(body: &str, options: &ParseOptions) -> ParseResult<Vec<Section>> {
    body.lines()
        .try_fold(Scanner::new(options), |mut scanner, line| {
            scanner.scan_line(line)?;
            Ok::<_, ParseError>(scanner)
        })?
        .finish()
}

/// Question whose text is still being collected.
struct PendingQuestion<'a> {
    id: String,
    number: u64,
    lines: Vec<&'a str>,
}

struct Scanner<'a, 'o> {
    options: &'o ParseOptions,
    sections: Vec<Section>,
    section: Option<Section>,
    question: Option<PendingQuestion<'a>>,
    seen_ids: HashSet<String>,
}

impl<'a, 'o> Scanner<'a, 'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
            section: None,
            question: None,
            seen_ids: HashSet::new(),
        }
    }

    fn scan_line(&mut self, line: &'a str) -> ParseResult<()> {
        match classify_line(line) {
            BodyLine::Section { title, id } => {
                self.close_section()?;
                self.open_section(title, id);
            }
            BodyLine::Question { number, text, id } => {
                self.flush_question()?;
                self.open_question(number, text, id);
            }
            BodyLine::Blank | BodyLine::Content(_) => match self.question.as_mut() {
                Some(question) => question.lines.push(line),
                None if !line.trim().is_empty() => {
                    tracing::debug!(line, "ignoring line outside of any question");
                }
                None => {}
            },
        }
        Ok(())
    }

    fn open_section(&mut self, title: &str, id: Option<&str>) {
        let id = match id {
            Some(id) => id.to_string(),
            None => Section::auto_id(self.sections.len() + 1),
        };
        self.note_id(&id);
        tracing::debug!(id = %id, title, "opening section");
        self.section = Some(Section::new(id, title));
    }

    /// The open section, opening the implicit one if no marker has been seen yet.
    fn ensure_section(&mut self) -> &mut Section {
        let options = self.options;
        let position = self.sections.len() + 1;
        self.section.get_or_insert_with(|| {
            let id = Section::auto_id(position);
            tracing::debug!(id = %id, "opening implicit section");
            Section::new(id, options.default_section_title.clone())
        })
    }

    fn open_question(&mut self, number: u64, text: &'a str, id: Option<&str>) {
        self.ensure_section();

        let id = match id {
            Some(id) => id.to_string(),
            None => format!("q{}", number),
        };
        self.note_id(&id);

        self.question = Some(PendingQuestion {
            id,
            number,
            lines: vec![strip_trailing_id(text)],
        });
    }

    /// Finish the open question and attach it to the open section.
    fn flush_question(&mut self) -> ParseResult<()> {
        let Some(pending) = self.question.take() else {
            return Ok(());
        };

        let joined = pending.lines.join("\n");
        let text = strip_trailing_id(joined.trim());
        let content = expand_blanks(text, &pending.id, self.options)?;

        let question = Question {
            id: pending.id,
            question_number: pending.number,
            content,
        };
        self.ensure_section().questions.push(question);
        Ok(())
    }

    fn close_section(&mut self) -> ParseResult<()> {
        self.flush_question()?;
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
        Ok(())
    }

    fn finish(mut self) -> ParseResult<Vec<Section>> {
        self.close_section()?;
        Ok(self.sections)
    }

    fn note_id(&mut self, id: &str) {
        if !self.seen_ids.insert(id.to_string()) {
            tracing::warn!(id, "duplicate id tolerated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(body: &str) -> Vec<Section> {
        scan_body(body, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_empty_body_has_no_sections() {
        assert!(scan("").is_empty());
        assert!(scan("\n\n   \n").is_empty());
    }

    #[test]
    fn test_stray_text_without_markers_is_dropped() {
        assert!(scan("Some intro text\nmore text\n").is_empty());
    }

    #[test]
    fn test_empty_sections_are_kept() {
        let sections = scan("§ First\n§ Second\n");
        let ids: Vec<_> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["section-1", "section-2"]);
        assert!(sections.iter().all(|s| s.questions.is_empty()));
    }

    #[test]
    fn test_implicit_section_then_explicit() {
        let sections = scan("1. First\n§ Later\n2. Second\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "section-1");
        assert_eq!(sections[0].title, "Questions");
        assert_eq!(sections[1].id, "section-2");
        assert_eq!(sections[1].title, "Later");
    }

    #[test]
    fn test_section_marker_ends_question() {
        let sections = scan("§ A\n1. Question\ncontinued\n§ B\ntrailing stray\n");
        assert_eq!(sections[0].questions.len(), 1);
        assert_eq!(
            sections[0].questions[0].display_text("_"),
            "Question\ncontinued"
        );
        assert!(sections[1].questions.is_empty());
    }

    #[test]
    fn test_inner_blank_lines_are_kept() {
        let sections = scan("1. Line one\n\n   Line two\n\n\n2. Next\n");
        let questions = &sections[0].questions;
        assert_eq!(questions[0].display_text("_"), "Line one\n\n   Line two");
        assert_eq!(questions[1].display_text("_"), "Next");
    }

    #[test]
    fn test_tag_on_continuation_line_is_stripped() {
        let sections = scan("1. Line one\nline two [#late]\n");
        let question = &sections[0].questions[0];
        assert_eq!(question.id, "q1");
        assert_eq!(question.display_text("_"), "Line one\nline two");
    }

    #[test]
    fn test_invalid_blank_aborts_scan() {
        let err = scan_body("§ A\n4. Fill { | }\n", &ParseOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidBlank {
                question_id: "q4".to_string(),
                token: "{ | }".to_string()
            }
        );
    }
}
