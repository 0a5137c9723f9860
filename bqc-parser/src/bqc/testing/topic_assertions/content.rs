//! Content item assertions

use crate::bqc::ast::{Blank, QuestionContent};

pub struct ContentAssertion<'a> {
    pub(crate) item: &'a QuestionContent,
    pub(crate) context: String,
}

impl<'a> ContentAssertion<'a> {
    fn expect_blank(&self) -> &'a Blank {
        match self.item {
            QuestionContent::Blank(blank) => blank,
            QuestionContent::Text { value } => {
                panic!("{}: Expected a blank, found Text({:?})", self.context, value)
            }
        }
    }

    /// Assert this item is the text run `expected`
    pub fn text(self, expected: &str) -> Self {
        match self.item {
            QuestionContent::Text { value } => assert_eq!(
                value, expected,
                "{}: Expected text {:?}, but got {:?}",
                self.context, expected, value
            ),
            QuestionContent::Blank(blank) => {
                panic!("{}: Expected text, found Blank({})", self.context, blank)
            }
        }
        self
    }

    pub fn id(self, expected: &str) -> Self {
        let blank = self.expect_blank();
        assert_eq!(
            blank.id, expected,
            "{}: Expected blank id to be '{}', but got '{}'",
            self.context, expected, blank.id
        );
        self
    }

    pub fn answers(self, expected: &[&str]) -> Self {
        let blank = self.expect_blank();
        assert_eq!(
            blank.answers, expected,
            "{}: Expected answers {:?}, but got {:?}",
            self.context, expected, blank.answers
        );
        self
    }

    pub fn placeholder(self, expected: &str) -> Self {
        let blank = self.expect_blank();
        assert_eq!(
            blank.placeholder, expected,
            "{}: Expected placeholder '{}', but got '{}'",
            self.context, expected, blank.placeholder
        );
        self
    }
}
