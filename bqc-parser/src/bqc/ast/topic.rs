//! Topic, the root of a parsed BQC document

use super::content::Blank;
use super::question::Question;
use super::section::Section;
use super::stats::TopicStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl Topic {
    /// All questions across sections, in document order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    /// All blanks across the document, in document order.
    pub fn blanks(&self) -> impl Iterator<Item = &Blank> {
        self.questions().flat_map(Question::blanks)
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// First question with the given id. Ids are not guaranteed unique; later duplicates are
    /// shadowed.
    pub fn find_question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn find_blank(&self, id: &str) -> Option<&Blank> {
        self.blanks().find(|blank| blank.id == id)
    }

    pub fn stats(&self) -> TopicStats {
        TopicStats::from_topic(self)
    }
}
