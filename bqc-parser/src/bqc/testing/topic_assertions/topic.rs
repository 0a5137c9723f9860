//! Topic-level assertions

use super::SectionAssertion;
use crate::bqc::ast::Topic;

pub struct TopicAssertion<'a> {
    pub(crate) topic: &'a Topic,
}

impl<'a> TopicAssertion<'a> {
    pub fn slug(self, expected: &str) -> Self {
        assert_eq!(
            self.topic.slug, expected,
            "Expected topic slug to be '{}', but got '{}'",
            expected, self.topic.slug
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.topic.title, expected,
            "Expected topic title to be '{}', but got '{}'",
            expected, self.topic.title
        );
        self
    }

    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.topic.description, expected,
            "Expected topic description to be '{}', but got '{}'",
            expected, self.topic.description
        );
        self
    }

    /// Assert the number of sections
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.topic.sections.len();
        let titles: Vec<_> = self
            .topic
            .sections
            .iter()
            .map(|section| section.title.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "Expected {} sections, found {} sections: {:?}",
            expected, actual, titles
        );
        self
    }

    /// Assert on a specific section by index
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.topic.sections.len(),
            "Section index {} out of bounds (topic has {} sections)",
            index,
            self.topic.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.topic.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }

    /// Assert the totals across the whole topic
    pub fn totals(self, sections: usize, questions: usize, blanks: usize) -> Self {
        let stats = self.topic.stats();
        assert_eq!(
            (stats.total_sections, stats.total_questions, stats.total_blanks),
            (sections, questions, blanks),
            "Expected {} sections, {} questions, {} blanks, found {}",
            sections,
            questions,
            blanks,
            stats
        );
        self
    }
}
