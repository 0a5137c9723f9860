//! Question assertions

use super::{summarize_content, ContentAssertion};
use crate::bqc::ast::Question;

pub struct QuestionAssertion<'a> {
    pub(crate) question: &'a Question,
    pub(crate) context: String,
}

impl<'a> QuestionAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(
            self.question.id, expected,
            "{}: Expected question id to be '{}', but got '{}'",
            self.context, expected, self.question.id
        );
        self
    }

    pub fn number(self, expected: u64) -> Self {
        assert_eq!(
            self.question.question_number, expected,
            "{}: Expected question number {}, but got {}",
            self.context, expected, self.question.question_number
        );
        self
    }

    pub fn content_count(self, expected: usize) -> Self {
        let actual = self.question.content.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} content items, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_content(&self.question.content)
        );
        self
    }

    pub fn blank_count(self, expected: usize) -> Self {
        let actual = self.question.blank_count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blanks, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_content(&self.question.content)
        );
        self
    }

    /// Assert the display text, with blanks shown as `___`
    pub fn display_text(self, expected: &str) -> Self {
        let actual = self.question.display_text("___");
        assert_eq!(
            actual, expected,
            "{}: Expected display text {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ContentAssertion<'a>),
    {
        let content = &self.question.content;
        assert!(
            index < content.len(),
            "{}: Content index {} out of bounds (question has {} items: [{}])",
            self.context,
            index,
            content.len(),
            summarize_content(content)
        );
        assertion(ContentAssertion {
            item: &content[index],
            context: format!("{}:content[{}]", self.context, index),
        });
        self
    }

    /// Shorthand: content item `index` is the text run `expected`
    pub fn text(self, index: usize, expected: &str) -> Self {
        self.item(index, |item| {
            item.text(expected);
        })
    }

    /// Shorthand: content item `index` is a blank with these answers and placeholder
    pub fn blank(self, index: usize, answers: &[&str], placeholder: &str) -> Self {
        self.item(index, |item| {
            item.answers(answers).placeholder(placeholder);
        })
    }
}
