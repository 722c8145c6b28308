use serde_json::json;

use lege_spec::{AnswerSet, QuestionnaireSpec, WizardState, validate};

#[test]
fn empty_answers_report_every_question() {
    let spec = QuestionnaireSpec::builtin();
    let answers = AnswerSet::empty(&spec);
    let result = validate(&spec, &answers);
    assert!(!result.valid);
    assert_eq!(
        result.missing,
        vec![
            "age_group",
            "participants",
            "duration",
            "location",
            "materials",
            "energy"
        ]
    );
}

#[test]
fn partially_filled_answers_list_remaining_questions() {
    let spec = QuestionnaireSpec::builtin();
    let mut state = WizardState::new(spec.clone());
    state.select_answer(0, "6-8 years");
    state.select_answer(3, "Indoors");
    state.select_answer(4, "Paper");
    let result = validate(&spec, state.answers());
    assert!(!result.valid);
    assert_eq!(result.missing, vec!["participants", "duration", "energy"]);
}

#[test]
fn fully_answered_set_is_valid() {
    let spec = QuestionnaireSpec::builtin();
    let mut state = WizardState::new(spec.clone());
    state.select_answer(0, "6-8 years");
    state.select_answer(1, "2");
    state.select_answer(2, "15-30 minutes");
    state.select_answer(3, "Indoors");
    state.select_answer(4, "Paper");
    state.select_answer(5, "Calm and quiet");
    let result = validate(&spec, state.answers());
    assert!(result.valid);
    assert!(result.missing.is_empty());
}

#[test]
fn document_roundtrip_keeps_slot_kinds() {
    let spec = QuestionnaireSpec::builtin();
    let document = json!({
        "age_group": "6-8 years",
        "participants": "2",
        "duration": "15-30 minutes",
        "location": "Indoors",
        "materials": ["Paper", "Crayons"],
        "energy": "Calm and quiet",
    });
    let answers = AnswerSet::from_document(&spec, &document).unwrap();
    assert!(validate(&spec, &answers).valid);
    assert_eq!(answers.to_document(&spec), document);
}

#[test]
fn document_with_unknown_id_is_rejected() {
    let spec = QuestionnaireSpec::builtin();
    let document = json!({ "weather": "Sunny" });
    assert!(AnswerSet::from_document(&spec, &document).is_err());
}

#[test]
fn document_with_wrong_kind_is_rejected() {
    let spec = QuestionnaireSpec::builtin();
    // materials is multi-select and must be an array.
    let document = json!({ "materials": "Paper" });
    assert!(AnswerSet::from_document(&spec, &document).is_err());

    let document = json!({ "age_group": ["6-8 years"] });
    assert!(AnswerSet::from_document(&spec, &document).is_err());
}

#[test]
fn missing_document_keys_stay_empty() {
    let spec = QuestionnaireSpec::builtin();
    let document = json!({ "location": "Outdoors" });
    let answers = AnswerSet::from_document(&spec, &document).unwrap();
    let result = validate(&spec, &answers);
    assert!(!result.valid);
    assert!(!result.missing.contains(&"location".to_string()));
    assert_eq!(result.missing.len(), 5);
}
