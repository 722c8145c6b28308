mod session;
mod wizard;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use lege_client::{CompletionBackend, HttpCompletionClient, speak};
use lege_spec::{
    AnswerSet, QuestionnaireSpec, compile_prompt, render_questionnaire_json, validate,
};
use serde_json::Value;

use session::{ERROR_MESSAGE, Session};
use wizard::Verbosity;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "lege",
    author,
    version,
    about = "Interactive play-idea wizard",
    long_about = "Walks through a fixed questionnaire about a play session and asks a text-generation service to invent a matching game"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum QuestionFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive questionnaire and generate a play idea.
    Wizard {
        /// Read the generated description aloud when it arrives.
        #[arg(long)]
        speak: bool,
        /// Show diagnostics for failures (never shown to end users).
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
    /// Print the built-in questionnaire.
    Questions {
        #[arg(long, value_enum, default_value_t = QuestionFormat::Text)]
        format: QuestionFormat,
    },
    /// Compile a JSON answer document into the request prompt without submitting it.
    Compile {
        /// Path to a JSON object keyed by question id.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Submit a JSON answer document and print the generated play description.
    Ask {
        /// Path to a JSON object keyed by question id.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Read the generated description aloud when it arrives.
        #[arg(long)]
        speak: bool,
        /// Show diagnostics for failures (never shown to end users).
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard { speak, verbose } => run_wizard(speak, verbose),
        Command::Questions { format } => run_questions(format),
        Command::Compile { answers } => run_compile(answers),
        Command::Ask {
            answers,
            speak,
            verbose,
        } => run_ask(answers, speak, verbose),
    }
}

fn run_wizard(speak_results: bool, verbose: bool) -> CliResult<()> {
    let client = HttpCompletionClient::from_env()?;
    let mut session = Session::new(client, verbose);
    wizard::run(
        &mut session,
        speak_results,
        Verbosity::from_verbose(verbose),
    )
}

fn run_questions(format: QuestionFormat) -> CliResult<()> {
    let spec = QuestionnaireSpec::builtin();
    match format {
        QuestionFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&render_questionnaire_json(&spec))?
            );
        }
        QuestionFormat::Text => {
            println!("{} ({})", spec.title, spec.id);
            for (index, question) in spec.questions.iter().enumerate() {
                let mode = if question.allows_multiple() {
                    "pick any"
                } else {
                    "pick one"
                };
                println!("{}. {} [{}]", index + 1, question.title, mode);
                println!("   {}", question.options.join(" / "));
            }
        }
    }
    Ok(())
}

fn load_answers(path: &Path) -> CliResult<(QuestionnaireSpec, AnswerSet)> {
    let spec = QuestionnaireSpec::builtin();
    let contents = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&contents)?;
    let answers = AnswerSet::from_document(&spec, &document)?;

    let result = validate(&spec, &answers);
    if !result.valid {
        return Err(format!("missing answers: {}", result.missing.join(", ")).into());
    }
    Ok((spec, answers))
}

fn run_compile(path: PathBuf) -> CliResult<()> {
    let (spec, answers) = load_answers(&path)?;
    println!("{}", compile_prompt(&spec, &answers)?);
    Ok(())
}

fn run_ask(path: PathBuf, speak_results: bool, verbose: bool) -> CliResult<()> {
    let (spec, answers) = load_answers(&path)?;
    let prompt = compile_prompt(&spec, &answers)?;
    let client = HttpCompletionClient::from_env()?;

    match client.complete(&prompt) {
        Ok(text) => {
            println!("{text}");
            if speak_results {
                speak(&text);
            }
            Ok(())
        }
        Err(err) => {
            if verbose {
                eprintln!("Submission failed: {err}");
            }
            Err(ERROR_MESSAGE.into())
        }
    }
}
