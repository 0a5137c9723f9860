//! Section assertions

use super::QuestionAssertion;
use crate::bqc::ast::Section;

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(
            self.section.id, expected,
            "{}: Expected section id to be '{}', but got '{}'",
            self.context, expected, self.section.id
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.section.title, expected,
            "{}: Expected section title to be '{}', but got '{}'",
            self.context, expected, self.section.title
        );
        self
    }

    pub fn question_count(self, expected: usize) -> Self {
        let actual = self.section.questions.len();
        let ids: Vec<_> = self
            .section
            .questions
            .iter()
            .map(|question| question.id.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected {} questions, found {} questions: {:?}",
            self.context, expected, actual, ids
        );
        self
    }

    pub fn question<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(QuestionAssertion<'a>),
    {
        let questions = &self.section.questions;
        assert!(
            index < questions.len(),
            "{}: Question index {} out of bounds (section has {} questions)",
            self.context,
            index,
            questions.len()
        );
        assertion(QuestionAssertion {
            question: &questions[index],
            context: format!("{}:questions[{}]", self.context, index),
        });
        self
    }
}
