//! Section element
//!
//!     Sections group questions under a title introduced by a `§` marker line. Question lines
//!     that appear before any marker are collected into an implicit section (`section-1`,
//!     titled "Questions" by default).

use super::question::Question;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Auto-generated id for the section at 1-based `position`.
    pub fn auto_id(position: usize) -> String {
        format!("section-{}", position)
    }
}
