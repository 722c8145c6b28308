use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::spec::{QuestionnaireSpec, SelectMode};

/// Answer storage for a single question. The variant always matches the
/// question's [`SelectMode`]: `Single` for single-select, `Multiple` for
/// multi-select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerSlot {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerSlot {
    /// Initial value for a slot of the given kind.
    pub fn empty_for(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => AnswerSlot::Single(String::new()),
            SelectMode::Multiple => AnswerSlot::Multiple(Vec::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnswerSlot::Single(value) => value.is_empty(),
            AnswerSlot::Multiple(values) => values.is_empty(),
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        match self {
            AnswerSlot::Single(value) => value == option,
            AnswerSlot::Multiple(values) => values.iter().any(|value| value == option),
        }
    }

    /// Flat text rendering: the single value, or the selections joined with
    /// a literal comma-and-space.
    pub fn display(&self) -> String {
        match self {
            AnswerSlot::Single(value) => value.clone(),
            AnswerSlot::Multiple(values) => values.join(", "),
        }
    }
}

/// Errors raised when loading an answer document against a questionnaire.
#[derive(Debug, Error)]
pub enum AnswerDocError {
    #[error("answer document must be a JSON object keyed by question id")]
    NotAnObject,
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("answer for '{0}' has the wrong kind (expected {1})")]
    KindMismatch(String, &'static str),
}

/// Ordered answers, one slot per question, index-aligned with the
/// questionnaire definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    slots: Vec<AnswerSlot>,
}

impl AnswerSet {
    /// All-empty answers for the given questionnaire, slot kinds matching
    /// each question's select mode.
    pub fn empty(spec: &QuestionnaireSpec) -> Self {
        AnswerSet {
            slots: spec
                .questions
                .iter()
                .map(|question| AnswerSlot::empty_for(question.select))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&AnswerSlot> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut AnswerSlot> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[AnswerSlot] {
        &self.slots
    }

    /// Build an answer set from a JSON object keyed by question id. Missing
    /// ids stay empty (presence is checked at submission, not here); unknown
    /// ids and kind mismatches are rejected.
    pub fn from_document(spec: &QuestionnaireSpec, document: &Value) -> Result<Self, AnswerDocError> {
        let map = document.as_object().ok_or(AnswerDocError::NotAnObject)?;

        for key in map.keys() {
            if !spec.questions.iter().any(|question| &question.id == key) {
                return Err(AnswerDocError::UnknownQuestion(key.clone()));
            }
        }

        let mut answers = AnswerSet::empty(spec);
        for (index, question) in spec.questions.iter().enumerate() {
            let Some(value) = map.get(&question.id) else {
                continue;
            };
            let slot = match (question.select, value) {
                (SelectMode::Single, Value::String(text)) => AnswerSlot::Single(text.clone()),
                (SelectMode::Multiple, Value::Array(items)) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        match item.as_str() {
                            Some(text) if !values.iter().any(|value: &String| value == text) => {
                                values.push(text.to_string());
                            }
                            Some(_) => {}
                            None => {
                                return Err(AnswerDocError::KindMismatch(
                                    question.id.clone(),
                                    "array of strings",
                                ));
                            }
                        }
                    }
                    AnswerSlot::Multiple(values)
                }
                (SelectMode::Single, _) => {
                    return Err(AnswerDocError::KindMismatch(question.id.clone(), "string"));
                }
                (SelectMode::Multiple, _) => {
                    return Err(AnswerDocError::KindMismatch(
                        question.id.clone(),
                        "array of strings",
                    ));
                }
            };
            if let Some(target) = answers.slot_mut(index) {
                *target = slot;
            }
        }

        Ok(answers)
    }

    /// JSON object keyed by question id, the inverse of [`from_document`].
    ///
    /// [`from_document`]: AnswerSet::from_document
    pub fn to_document(&self, spec: &QuestionnaireSpec) -> Value {
        let mut map = serde_json::Map::new();
        for (question, slot) in spec.questions.iter().zip(&self.slots) {
            let value = match slot {
                AnswerSlot::Single(text) => Value::String(text.clone()),
                AnswerSlot::Multiple(values) => Value::Array(
                    values.iter().cloned().map(Value::String).collect(),
                ),
            };
            map.insert(question.id.clone(), value);
        }
        Value::Object(map)
    }
}
