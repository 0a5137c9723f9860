//! Question element
//!
//!     A question starts at a line of the form `<digits>. <text>` and extends over every following
//!     line until the next question or section marker. The digits are kept verbatim as
//!     `question_number`; they are not required to be sequential or unique.

use super::content::{Blank, QuestionContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question_number: u64,
    pub content: Vec<QuestionContent>,
}

impl Question {
    /// Blanks in source order.
    pub fn blanks(&self) -> impl Iterator<Item = &Blank> {
        self.content.iter().filter_map(QuestionContent::as_blank)
    }

    pub fn blank_count(&self) -> usize {
        self.blanks().count()
    }

    /// Questions without blanks are informational only.
    pub fn is_informational(&self) -> bool {
        self.blank_count() == 0
    }

    /// Display text with every blank replaced by `fill`.
    pub fn display_text(&self, fill: &str) -> String {
        self.content
            .iter()
            .map(|item| match item {
                QuestionContent::Text { value } => value.as_str(),
                QuestionContent::Blank(_) => fill,
            })
            .collect()
    }
}
