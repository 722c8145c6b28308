use serde_json::{Value, json};

use crate::engine::WizardState;
use crate::spec::{QuestionnaireSpec, SelectMode};

/// One selectable option as the presenter shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

/// View of the current step, ready for the presentation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub index: usize,
    pub total: usize,
    pub title: String,
    pub multiple: bool,
    pub options: Vec<OptionView>,
    pub answered: usize,
}

/// Extract the presenter view for the wizard's current step.
pub fn build_step_view(state: &WizardState) -> StepView {
    let question = state.current_question();
    let slot = state.answers().slot(state.step());
    let options = question
        .options
        .iter()
        .map(|label| OptionView {
            label: label.clone(),
            selected: slot.is_some_and(|slot| slot.contains(label)),
        })
        .collect();
    let answered = state
        .answers()
        .slots()
        .iter()
        .filter(|slot| !slot.is_empty())
        .count();

    StepView {
        index: state.step(),
        total: state.spec().len(),
        title: question.title.clone(),
        multiple: question.allows_multiple(),
        options,
        answered,
    }
}

/// Render a step view as human-friendly text.
pub fn render_step_text(view: &StepView) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Question {}/{}: {}",
        view.index + 1,
        view.total,
        view.title
    ));
    if view.multiple {
        lines.push("(pick any number; picking again removes a selection)".to_string());
    }
    for (position, option) in view.options.iter().enumerate() {
        let marker = if option.selected { "[x]" } else { "[ ]" };
        lines.push(format!("  {:>2}) {} {}", position + 1, marker, option.label));
    }
    lines.push(format!("Answered {}/{}", view.answered, view.total));
    lines.join("\n")
}

/// Render the whole questionnaire as a structured JSON value.
pub fn render_questionnaire_json(spec: &QuestionnaireSpec) -> Value {
    let questions = spec
        .questions
        .iter()
        .map(|question| {
            json!({
                "id": question.id,
                "title": question.title,
                "select": select_mode_label(question.select),
                "options": question.options,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "id": spec.id,
        "title": spec.title,
        "version": spec.version,
        "questions": questions,
    })
}

fn select_mode_label(mode: SelectMode) -> &'static str {
    match mode {
        SelectMode::Single => "single",
        SelectMode::Multiple => "multiple",
    }
}
