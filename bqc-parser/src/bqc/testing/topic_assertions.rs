//! Fluent assertion API for parsed topics
//!
//!     Each assertion wraps a node and a context string naming its path from the topic. Methods
//!     consume and return the assertion so checks chain; nested nodes are reached through
//!     closures.

mod content;
mod question;
mod section;
mod topic;

pub use content::ContentAssertion;
pub use question::QuestionAssertion;
pub use section::SectionAssertion;
pub use topic::TopicAssertion;

use crate::bqc::ast::{QuestionContent, Topic};

/// Create an assertion builder for a topic
pub fn assert_topic(topic: &Topic) -> TopicAssertion<'_> {
    TopicAssertion { topic }
}

fn summarize_content(content: &[QuestionContent]) -> String {
    content
        .iter()
        .map(|item| match item {
            QuestionContent::Text { value } => format!("Text({:?})", value),
            QuestionContent::Blank(blank) => format!("Blank({})", blank),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
