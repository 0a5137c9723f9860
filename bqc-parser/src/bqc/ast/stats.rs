//! Summary counts for a parsed topic

use super::topic::Topic;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub total_sections: usize,
    pub total_questions: usize,
    pub total_blanks: usize,
}

impl TopicStats {
    pub fn from_topic(topic: &Topic) -> Self {
        topic
            .sections
            .iter()
            .fold(TopicStats::default(), |mut stats, section| {
                stats.total_sections += 1;
                stats.total_questions += section.questions.len();
                stats.total_blanks += section
                    .questions
                    .iter()
                    .map(|question| question.blank_count())
                    .sum::<usize>();
                stats
            })
    }
}

impl fmt::Display for TopicStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sections, {} questions, {} blanks",
            self.total_sections, self.total_questions, self.total_blanks
        )
    }
}
