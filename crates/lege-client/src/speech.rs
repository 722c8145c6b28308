use std::process::{Command, Stdio};

/// Locale tag handed to the speech synthesizer.
pub const SPEECH_LOCALE: &str = "en-US";

/// Vocalize the result text through the platform speech synthesizer.
/// Fire-and-forget: the child process is detached, its output discarded,
/// and spawn failures produce a stderr note at most. Nothing here can fail
/// the session.
pub fn speak(text: &str) {
    for mut command in synthesizer_commands(text) {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if command.spawn().is_ok() {
            return;
        }
    }
    eprintln!("No speech synthesizer available; skipping read-aloud.");
}

#[cfg(target_os = "macos")]
fn synthesizer_commands(text: &str) -> Vec<Command> {
    let mut say = Command::new("say");
    say.arg(text);
    vec![say]
}

#[cfg(not(target_os = "macos"))]
fn synthesizer_commands(text: &str) -> Vec<Command> {
    let mut spd_say = Command::new("spd-say");
    spd_say.args(["-l", SPEECH_LOCALE]).arg(text);
    let mut espeak = Command::new("espeak");
    espeak.args(["-v", "en-us"]).arg(text);
    vec![spd_say, espeak]
}
