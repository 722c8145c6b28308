use lege_client::CompletionBackend;
use lege_spec::{QuestionnaireSpec, WizardState, compile_prompt, validate};

/// The one user-facing failure message. Internals of the failure stay on
/// stderr behind the verbose switch.
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Terminal phase reached once a submission has run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Completion text from the external collaborator, verbatim.
    Result(String),
    /// Generic failure; the only recovery is a full reset.
    ErrorResult,
}

/// What became of a submission request.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Presence check failed; the external collaborator was never invoked
    /// and the questionnaire stays where it was.
    Rejected { missing: Vec<String> },
    /// The single external call ran to completion or failure.
    Completed(Outcome),
}

/// Owns the wizard state and the completion backend; the only asynchronous
/// boundary in the program is the blocking external call inside [`submit`].
/// While that call runs nothing re-renders the questionnaire, so re-entrant
/// submission cannot happen.
///
/// [`submit`]: Session::submit
pub struct Session<C: CompletionBackend> {
    state: WizardState,
    backend: C,
    verbose: bool,
}

impl<C: CompletionBackend> Session<C> {
    pub fn new(backend: C, verbose: bool) -> Self {
        Session {
            state: WizardState::new(QuestionnaireSpec::builtin()),
            backend,
            verbose,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    /// Validate, compile, and perform the single external call. The call is
    /// made at most once per submission and only when every slot is
    /// populated per its kind.
    pub fn submit(&mut self) -> Submission {
        let validation = validate(self.state.spec(), self.state.answers());
        if !validation.valid {
            return Submission::Rejected {
                missing: validation.missing,
            };
        }

        let prompt = match compile_prompt(self.state.spec(), self.state.answers()) {
            Ok(prompt) => prompt,
            Err(err) => {
                if self.verbose {
                    eprintln!("Prompt compilation failed: {err}");
                }
                return Submission::Completed(Outcome::ErrorResult);
            }
        };

        match self.backend.complete(&prompt) {
            Ok(text) => Submission::Completed(Outcome::Result(text)),
            Err(err) => {
                if self.verbose {
                    eprintln!("Submission failed: {err}");
                }
                Submission::Completed(Outcome::ErrorResult)
            }
        }
    }

    /// Full reset: a brand-new wizard state, discarding answers and result.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
