use crate::answers::{AnswerSet, AnswerSlot};
use crate::spec::{QuestionSpec, QuestionnaireSpec, SelectMode};

/// Outcome of a forward navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Advanced,
    /// Already on the last step; the caller should start submission.
    ReadyToSubmit,
}

/// Mutable wizard session state: the current step index plus the collected
/// answers. Owned by exactly one session and mutated synchronously through
/// the operations below; submission is handled by the enclosing session.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    spec: QuestionnaireSpec,
    step: usize,
    answers: AnswerSet,
}

impl WizardState {
    pub fn new(spec: QuestionnaireSpec) -> Self {
        let answers = AnswerSet::empty(&spec);
        WizardState {
            spec,
            step: 0,
            answers,
        }
    }

    pub fn spec(&self) -> &QuestionnaireSpec {
        &self.spec
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> &QuestionSpec {
        // step is always a valid index, see go_to_step / advance_or_submit.
        &self.spec.questions[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.spec.len()
    }

    /// Record a selection for the given step. Single-select overwrites the
    /// slot; multi-select toggles membership, preserving insertion order of
    /// the remaining picks. Out-of-range steps and options that are not part
    /// of the question are ignored: the presenter only ever offers defined
    /// options.
    pub fn select_answer(&mut self, step: usize, option: &str) {
        let Some(question) = self.spec.question(step) else {
            return;
        };
        if !question.has_option(option) {
            return;
        }
        let select = question.select;
        let Some(slot) = self.answers.slot_mut(step) else {
            return;
        };
        match (select, slot) {
            (SelectMode::Single, AnswerSlot::Single(value)) => {
                *value = option.to_string();
            }
            (SelectMode::Multiple, AnswerSlot::Multiple(values)) => {
                if values.iter().any(|value| value == option) {
                    values.retain(|value| value != option);
                } else {
                    values.push(option.to_string());
                }
            }
            // Slot kinds are fixed at construction and always match the
            // question's select mode.
            _ => {}
        }
    }

    /// Move to `target` if it is a valid step index; out-of-range targets
    /// are a no-op, not an error.
    pub fn go_to_step(&mut self, target: usize) {
        if target < self.spec.len() {
            self.step = target;
        }
    }

    /// Step back one question, staying on the first step if already there.
    pub fn back(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Step forward, or signal that the wizard is on its final step and the
    /// session should submit. Presence of answers is deliberately not
    /// checked here; it is enforced once, at submission.
    pub fn advance_or_submit(&mut self) -> Advance {
        if self.is_last_step() {
            Advance::ReadyToSubmit
        } else {
            self.step += 1;
            Advance::Advanced
        }
    }

    /// Discard all progress: back to step 0 with all-empty slots.
    pub fn reset(&mut self) {
        self.step = 0;
        self.answers = AnswerSet::empty(&self.spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> WizardState {
        WizardState::new(QuestionnaireSpec::builtin())
    }

    #[test]
    fn single_select_overwrites() {
        let mut state = state();
        state.select_answer(0, "3-5 years");
        state.select_answer(0, "6-8 years");
        assert_eq!(
            state.answers().slot(0),
            Some(&AnswerSlot::Single("6-8 years".into()))
        );
    }

    #[test]
    fn multi_select_double_toggle_restores_membership() {
        let mut state = state();
        state.select_answer(4, "Paper");
        state.select_answer(4, "Crayons");
        state.select_answer(4, "Balls");
        state.select_answer(4, "Crayons");
        state.select_answer(4, "Crayons");
        assert_eq!(
            state.answers().slot(4),
            Some(&AnswerSlot::Multiple(vec![
                "Paper".into(),
                "Balls".into(),
                "Crayons".into(),
            ]))
        );
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut state = state();
        state.select_answer(0, "100 years");
        assert!(state.answers().slot(0).is_some_and(AnswerSlot::is_empty));
    }

    #[test]
    fn go_to_step_never_leaves_bounds() {
        let mut state = state();
        state.go_to_step(3);
        assert_eq!(state.step(), 3);
        state.go_to_step(99);
        assert_eq!(state.step(), 3);
        state.go_to_step(usize::MAX);
        assert_eq!(state.step(), 3);
        state.go_to_step(0);
        assert_eq!(state.step(), 0);
        state.back();
        assert_eq!(state.step(), 0);
    }

    #[test]
    fn advance_reports_ready_on_last_step() {
        let mut state = state();
        for _ in 0..5 {
            assert_eq!(state.advance_or_submit(), Advance::Advanced);
        }
        assert!(state.is_last_step());
        assert_eq!(state.advance_or_submit(), Advance::ReadyToSubmit);
        assert_eq!(state.step(), 5);
    }

    #[test]
    fn reset_restores_initial_form() {
        let mut state = state();
        state.select_answer(0, "6-8 years");
        state.select_answer(4, "Paper");
        state.go_to_step(5);
        state.reset();
        assert_eq!(state, WizardState::new(QuestionnaireSpec::builtin()));
    }
}
