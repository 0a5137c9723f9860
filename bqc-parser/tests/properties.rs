//! Property-based tests for the parser
//!
//! Documents are generated from a small model (sections of questions of blanks), written out as
//! BQC text and parsed back. The properties check what must hold for any such document:
//! - Parsing is deterministic
//! - Section, question and blank counts follow the markers in the source
//! - Blank ids are `<questionId>-blank-<k>` with k counting from zero per question
//! - Every blank has at least one answer, and answers are trimmed
//! - Rendering a parsed topic and parsing it again gives the same topic

use bqc_parser::bqc::formats::render;
use bqc_parser::bqc::parsing::parse_document;
use bqc_parser::parse;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct BlankModel {
    answers: Vec<String>,
    placeholder: Option<String>,
}

#[derive(Debug, Clone)]
struct QuestionModel {
    /// Text runs around the blanks; always one more than the blanks.
    runs: Vec<String>,
    blanks: Vec<BlankModel>,
}

#[derive(Debug, Clone)]
struct SectionModel {
    title: String,
    questions: Vec<QuestionModel>,
}

fn answer_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[a-z]{1,6} [a-z]{1,6}",
        // Padding is trimmed away
        " {1,2}[A-Za-z0-9]{1,6} {0,2}",
    ]
}

fn blank_strategy() -> impl Strategy<Value = BlankModel> {
    (
        prop::collection::vec(answer_strategy(), 1..4),
        prop::option::of("[a-z]{1,6}( [a-z]{1,6})?"),
    )
        .prop_map(|(answers, placeholder)| BlankModel {
            answers,
            placeholder,
        })
}

fn run_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.?]{0,12}"
}

fn question_strategy() -> impl Strategy<Value = QuestionModel> {
    prop::collection::vec(blank_strategy(), 0..4).prop_flat_map(|blanks| {
        let runs = prop::collection::vec(run_strategy(), blanks.len() + 1);
        (runs, Just(blanks)).prop_map(|(runs, blanks)| QuestionModel { runs, blanks })
    })
}

fn section_strategy() -> impl Strategy<Value = SectionModel> {
    (
        "[A-Z][a-z]{0,8}",
        prop::collection::vec(question_strategy(), 0..4),
    )
        .prop_map(|(title, questions)| SectionModel { title, questions })
}

fn document_strategy() -> impl Strategy<Value = Vec<SectionModel>> {
    prop::collection::vec(section_strategy(), 0..4)
}

fn blank_token(blank: &BlankModel) -> String {
    match &blank.placeholder {
        Some(placeholder) => format!("{{{}::{}}}", blank.answers.join("|"), placeholder),
        None => format!("{{{}}}", blank.answers.join("|")),
    }
}

/// Question numbers run from 1 across the whole document.
fn build_source(sections: &[SectionModel]) -> String {
    let mut source = String::from("---\nslug: generated\ntitle: Generated\ndescription: d\n---\n");
    let mut number = 0;
    for section in sections {
        source.push_str(&format!("\n§ {}\n", section.title));
        for question in &section.questions {
            number += 1;
            // Leading word keeps the marker line non-empty
            let mut text = String::from("Q");
            for (run, blank) in question.runs.iter().zip(&question.blanks) {
                text.push_str(run);
                text.push_str(&blank_token(blank));
            }
            if let Some(last) = question.runs.last() {
                text.push_str(last);
            }
            source.push_str(&format!("{}. {}\n", number, text));
        }
    }
    source
}

proptest! {
    #[test]
    fn parse_is_deterministic(sections in document_strategy()) {
        let source = build_source(&sections);
        prop_assert_eq!(parse(&source).unwrap(), parse(&source).unwrap());
    }

    #[test]
    fn counts_follow_markers(sections in document_strategy()) {
        let topic = parse(&build_source(&sections)).unwrap();

        prop_assert_eq!(topic.sections.len(), sections.len());
        for (section, model) in topic.sections.iter().zip(&sections) {
            prop_assert_eq!(&section.title, &model.title);
            prop_assert_eq!(section.questions.len(), model.questions.len());
            for (question, model) in section.questions.iter().zip(&model.questions) {
                prop_assert_eq!(question.blank_count(), model.blanks.len());
            }
        }
    }

    #[test]
    fn blank_ids_are_sequential_per_question(sections in document_strategy()) {
        let topic = parse(&build_source(&sections)).unwrap();

        for question in topic.questions() {
            for (k, blank) in question.blanks().enumerate() {
                prop_assert_eq!(&blank.id, &format!("{}-blank-{}", question.id, k));
            }
        }
    }

    #[test]
    fn answers_are_trimmed_and_present(sections in document_strategy()) {
        let topic = parse(&build_source(&sections)).unwrap();
        let models = sections.iter().flat_map(|s| &s.questions).flat_map(|q| &q.blanks);

        for (blank, model) in topic.blanks().zip(models) {
            let expected: Vec<String> = model.answers.iter().map(|a| a.trim().to_string()).collect();
            prop_assert!(!blank.answers.is_empty());
            prop_assert_eq!(&blank.answers, &expected);
            let placeholder = model.placeholder.as_deref().unwrap_or("...");
            prop_assert_eq!(blank.placeholder.as_str(), placeholder);
        }
    }

    #[test]
    fn render_round_trips(sections in document_strategy()) {
        let doc = parse_document(&build_source(&sections)).unwrap();
        let rendered = render(&doc.metadata, &doc.topic);
        prop_assert_eq!(parse(&rendered).unwrap(), doc.topic);
    }
}
