use serde::{Deserialize, Serialize};

/// Selection behavior of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Exactly one option; a new pick overwrites the previous one.
    Single,
    /// Any subset of the options; picks toggle membership.
    Multiple,
}

/// One fixed question in the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: String,
    pub title: String,
    pub select: SelectMode,
    pub options: Vec<String>,
}

impl QuestionSpec {
    pub fn allows_multiple(&self) -> bool {
        matches!(self.select, SelectMode::Multiple)
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}
