use lege_spec::{QuestionnaireSpec, WizardState, compile_prompt};

fn reference_state() -> WizardState {
    let mut state = WizardState::new(QuestionnaireSpec::builtin());
    state.select_answer(0, "6-8 years");
    state.select_answer(1, "2");
    state.select_answer(2, "15-30 minutes");
    state.select_answer(3, "Indoors");
    state.select_answer(4, "Paper");
    state.select_answer(4, "Crayons");
    state.select_answer(5, "Calm and quiet");
    state
}

#[test]
fn reference_answers_compile_to_the_fixed_danish_prompt() {
    let state = reference_state();
    let prompt = compile_prompt(state.spec(), state.answers()).unwrap();
    assert_eq!(
        prompt,
        "Opfind og igangsæt en fantasifuld leg for børn i alderen 6-8 years. \
         Den skal gælde for 2 børn. \
         Legen vil have en varighed på cirka 15-30 minutes. \
         Legen skal foregå Indoors. \
         Følgende materialer er tilrådighed: Paper, Crayons. \
         Legen skal foregå Calm and quiet. \
         Baseret på materialerne og området leget foregår, skal du opfinde en \
         fantasifuld baggrundshistorie som børnene kan leve sig ind i. \
         Derudover skal du finde på et formål/mission med legen. \
         Dit svar skal være på engelsk og mellem 10-15 linjer."
    );
}

#[test]
fn compile_prompt_is_deterministic() {
    let state = reference_state();
    let first = compile_prompt(state.spec(), state.answers()).unwrap();
    let second = compile_prompt(state.spec(), state.answers()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn multi_select_joins_in_pick_order() {
    let mut state = WizardState::new(QuestionnaireSpec::builtin());
    state.select_answer(4, "Crayons");
    state.select_answer(4, "Paper");
    state.select_answer(4, "Balls");
    let prompt = compile_prompt(state.spec(), state.answers()).unwrap();
    assert!(prompt.contains("Følgende materialer er tilrådighed: Crayons, Paper, Balls."));
}

#[test]
fn values_are_interpolated_verbatim() {
    let state = reference_state();
    let prompt = compile_prompt(state.spec(), state.answers()).unwrap();
    for value in ["6-8 years", "2", "15-30 minutes", "Indoors", "Paper, Crayons", "Calm and quiet"] {
        assert!(prompt.contains(value), "prompt missing '{value}'");
    }
    assert!(!prompt.contains("{{"), "unrendered placeholder left in prompt");
}
