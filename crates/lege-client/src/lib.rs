#![allow(missing_docs)]

pub mod completion;
pub mod config;
pub mod speech;

pub use completion::{ClientError, CompletionBackend, HttpCompletionClient};
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use speech::{SPEECH_LOCALE, speak};
