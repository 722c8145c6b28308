use url::Url;

use crate::completion::ClientError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Endpoint configuration for the text-generation client. The bearer secret
/// itself is handed to the client separately and never stored here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: Url::parse(DEFAULT_API_URL).expect("default endpoint is a valid URL"),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Defaults with optional `LEGE_API_URL` / `LEGE_MODEL` overrides from
    /// the environment.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = ClientConfig::default();
        if let Ok(raw) = std::env::var("LEGE_API_URL") {
            config.api_url = Url::parse(&raw)
                .map_err(|err| ClientError::Configuration(format!("invalid LEGE_API_URL: {err}")))?;
        }
        if let Ok(model) = std::env::var("LEGE_MODEL")
            && !model.trim().is_empty()
        {
            config.model = model;
        }
        Ok(config)
    }
}
