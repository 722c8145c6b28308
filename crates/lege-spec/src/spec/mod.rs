pub mod question;
pub mod questionnaire;

pub use question::{QuestionSpec, SelectMode};
pub use questionnaire::QuestionnaireSpec;
