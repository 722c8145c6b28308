//! Text-generation client backed by an OpenAI-compatible chat endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

/// Failures surfaced by the completion boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local setup problem (missing key, bad endpoint). Raised before any
    /// request is made.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The external call failed: network error, non-success status, or a
    /// response body without the expected completion text. Deliberately a
    /// single category; the message is diagnostic only and never shown as-is
    /// to the user.
    #[error("text generation request failed: {0}")]
    ExternalCallFailed(String),
}

/// Opaque capability: given a prompt, return a completion or fail.
pub trait CompletionBackend {
    fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}

/// HTTP client for the chat-completions endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    config: ClientConfig,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.config.api_url)
            .field("model", &self.config.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    pub fn new(api_key: String, config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| {
                ClientError::Configuration(format!("failed to create HTTP client: {err}"))
            })?;

        Ok(Self {
            api_key,
            config,
            client,
        })
    }

    /// Build from `OPENAI_API_KEY` plus the environment overrides handled by
    /// [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ClientError::Configuration("OPENAI_API_KEY environment variable not set".into())
        })?;
        Self::new(api_key, ClientConfig::from_env()?)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl CompletionBackend for HttpCompletionClient {
    /// One POST per call: a single-message conversation carrying the prompt
    /// as user-role content. No retries, no backoff; the session resets on
    /// failure instead.
    fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let request = ApiRequest {
            model: &self.config.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.config.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|err| ClientError::ExternalCallFailed(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ExternalCallFailed(format!(
                "API error ({})",
                status.as_u16()
            )));
        }

        let body: ApiResponse = response.json().map_err(|err| {
            ClientError::ExternalCallFailed(format!("failed to parse response: {err}"))
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                ClientError::ExternalCallFailed("no completion text in response".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_client(server_url: &str) -> HttpCompletionClient {
        let config = ClientConfig {
            api_url: Url::parse(server_url).unwrap(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 1,
        };
        HttpCompletionClient::new("fake-key".to_string(), config).unwrap()
    }

    #[test]
    fn complete_extracts_message_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer fake-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{ "role": "user", "content": "test prompt" }],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "A fine game."}}]}"#,
            )
            .create();

        let result = test_client(&server.url()).complete("test prompt");
        assert_eq!(result.unwrap(), "A fine game.");
        mock.assert();
    }

    #[test]
    fn complete_fails_on_server_error_without_retrying() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(500).expect(1).create();

        let result = test_client(&server.url()).complete("test prompt");
        assert!(matches!(result, Err(ClientError::ExternalCallFailed(_))));
        mock.assert();
    }

    #[test]
    fn complete_fails_on_missing_choices() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "cmpl-1"}"#)
            .create();

        let result = test_client(&server.url()).complete("test prompt");
        assert!(matches!(result, Err(ClientError::ExternalCallFailed(_))));
    }

    #[test]
    fn complete_fails_on_missing_content_field() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
            .create();

        let result = test_client(&server.url()).complete("test prompt");
        assert!(matches!(result, Err(ClientError::ExternalCallFailed(_))));
    }

    #[test]
    fn complete_fails_on_unparsable_body() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create();

        let result = test_client(&server.url()).complete("test prompt");
        assert!(matches!(result, Err(ClientError::ExternalCallFailed(_))));
    }
}
