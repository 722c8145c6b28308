use std::io::{self, Write};

use lege_client::{CompletionBackend, speak};
use lege_spec::{Advance, WizardState, build_step_view, render_step_text, validate};

use crate::CliResult;
use crate::session::{ERROR_MESSAGE, Outcome, Session, Submission};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: question prompts only.
    Clean,
    /// Verbose output: diagnostics for engineering root causes.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints wizard state once the engine yields a step; the engine itself
/// never touches the terminal.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self, title: &str) {
        if self.header_printed {
            return;
        }
        println!("{title}");
        println!(
            "Answer by option number. 'b' goes back, enter (or 'n') continues, 'exit' quits."
        );
        self.header_printed = true;
    }

    pub fn show_step(&self, state: &WizardState) {
        println!();
        println!("{}", render_step_text(&build_step_view(state)));
        if self.verbosity.is_verbose() {
            println!("Step index: {}", state.step());
        }
    }

    pub fn show_missing(&self, missing: &[String]) {
        println!("Some questions still need an answer: {}", missing.join(", "));
    }

    pub fn show_generating(&self) {
        println!("Generating...");
    }

    pub fn show_result(&self, text: &str) {
        println!();
        println!("Play Description:");
        println!("{text}");
        println!();
        println!("'s' reads it aloud, 'r' starts over, 'q' quits.");
    }

    pub fn show_error(&self) {
        println!();
        println!("{ERROR_MESSAGE}");
        println!("'r' starts over, 'q' quits.");
    }
}

/// Drive the interactive wizard until the user quits or stdin closes.
pub fn run<C: CompletionBackend>(
    session: &mut Session<C>,
    speak_results: bool,
    verbosity: Verbosity,
) -> CliResult<()> {
    let mut presenter = WizardPresenter::new(verbosity);
    presenter.show_header(&session.state().spec().title);

    loop {
        presenter.show_step(session.state());
        let Some(input) = read_command()? else {
            return Ok(());
        };
        match input.as_str() {
            "exit" | "quit" | "q" => return Ok(()),
            "back" | "b" => session.state_mut().back(),
            "" | "next" | "n" | "submit" => match session.state_mut().advance_or_submit() {
                Advance::Advanced => {}
                Advance::ReadyToSubmit => {
                    if validate(session.state().spec(), session.state().answers()).valid {
                        presenter.show_generating();
                    }
                    match session.submit() {
                        Submission::Rejected { missing } => presenter.show_missing(&missing),
                        Submission::Completed(outcome) => {
                            if !finish(session, outcome, speak_results, &presenter)? {
                                return Ok(());
                            }
                        }
                    }
                }
            },
            other => match other.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    let step = session.state().step();
                    let option = session
                        .state()
                        .current_question()
                        .options
                        .get(number - 1)
                        .cloned();
                    match option {
                        Some(option) => session.state_mut().select_answer(step, &option),
                        None => println!("No option number {number} on this question."),
                    }
                }
                _ => println!("Unrecognized input '{other}'."),
            },
        }
    }
}

/// Result/error screen. Returns `Ok(true)` when the wizard should restart
/// with a fresh state, `Ok(false)` when the user is done.
fn finish<C: CompletionBackend>(
    session: &mut Session<C>,
    outcome: Outcome,
    speak_results: bool,
    presenter: &WizardPresenter,
) -> CliResult<bool> {
    match &outcome {
        Outcome::Result(text) => {
            presenter.show_result(text);
            if speak_results {
                speak(text);
            }
        }
        Outcome::ErrorResult => presenter.show_error(),
    }

    loop {
        let Some(input) = read_command()? else {
            return Ok(false);
        };
        match (input.as_str(), &outcome) {
            ("s" | "speak", Outcome::Result(text)) => speak(text),
            ("r" | "restart", _) => {
                session.reset();
                return Ok(true);
            }
            ("q" | "quit" | "exit", _) => return Ok(false),
            (other, _) => println!("Unrecognized input '{other}'."),
        }
    }
}

/// Read one trimmed, lowercased command line; `None` means stdin closed.
fn read_command() -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
