use handlebars::Handlebars;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::answers::AnswerSet;
use crate::spec::QuestionnaireSpec;

/// The fixed request template. Placeholders are the built-in question ids;
/// the wording (including the trailing language instruction) is part of the
/// product contract and must not drift.
pub const PROMPT_TEMPLATE: &str = "Opfind og igangsæt en fantasifuld leg for børn i alderen {{age_group}}. Den skal gælde for {{participants}} børn. Legen vil have en varighed på cirka {{duration}}. Legen skal foregå {{location}}. Følgende materialer er tilrådighed: {{materials}}. Legen skal foregå {{energy}}. Baseret på materialerne og området leget foregår, skal du opfinde en fantasifuld baggrundshistorie som børnene kan leve sig ind i. Derudover skal du finde på et formål/mission med legen. Dit svar skal være på engelsk og mellem 10-15 linjer.";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to register prompt template: {0}")]
    Register(#[from] Box<handlebars::TemplateError>),
    #[error("failed to render prompt: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Deterministically compile a completed answer set into the request prompt.
/// Multi-select slots join with a literal comma-and-space; identical answers
/// always produce byte-identical output.
pub fn compile_prompt(
    spec: &QuestionnaireSpec,
    answers: &AnswerSet,
) -> Result<String, TemplateError> {
    let mut registry = Handlebars::new();
    // Prompts are plain text, not HTML.
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string("prompt", PROMPT_TEMPLATE)
        .map_err(Box::new)?;

    let mut data = Map::new();
    for (question, slot) in spec.questions.iter().zip(answers.slots()) {
        data.insert(question.id.clone(), Value::String(slot.display()));
    }

    Ok(registry.render("prompt", &Value::Object(data))?)
}
