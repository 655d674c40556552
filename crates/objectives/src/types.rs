//! Objectives parsed from the exam page.

use serde::{Deserialize, Serialize};

/// One exam section: its heading and the skills listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSection {
    /// Heading text, e.g. `Design identity, governance, and monitoring solutions (25–30%)`.
    pub title: String,
    pub items: Vec<String>,
}

impl ObjectiveSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// Every section of the skills-measured outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamObjectives {
    /// Date of the fetch, formatted like `January 05, 2026`.
    pub last_updated: String,
    pub sections: Vec<ObjectiveSection>,
}

impl ExamObjectives {
    /// Total number of listed skills.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
