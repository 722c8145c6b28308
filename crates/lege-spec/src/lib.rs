#![allow(missing_docs)]

pub mod answers;
pub mod engine;
pub mod render;
pub mod spec;
pub mod template;
pub mod validate;

pub use answers::{AnswerDocError, AnswerSet, AnswerSlot};
pub use engine::{Advance, WizardState};
pub use render::{
    OptionView, StepView, build_step_view, render_questionnaire_json, render_step_text,
};
pub use spec::{QuestionSpec, QuestionnaireSpec, SelectMode};
pub use template::{PROMPT_TEMPLATE, TemplateError, compile_prompt};
pub use validate::{ValidationResult, validate};
