use crate::answers::AnswerSet;
use crate::spec::QuestionnaireSpec;

/// Presence-check result. The wizard allows navigating past empty steps;
/// this check gates submission only.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub missing: Vec<String>,
}

pub fn validate(spec: &QuestionnaireSpec, answers: &AnswerSet) -> ValidationResult {
    let mut missing = Vec::new();

    for (index, question) in spec.questions.iter().enumerate() {
        let empty = answers.slot(index).is_none_or(|slot| slot.is_empty());
        if empty {
            missing.push(question.id.clone());
        }
    }

    ValidationResult {
        valid: missing.is_empty(),
        missing,
    }
}
