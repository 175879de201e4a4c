//! Remote inference client
//!
//! Sends one chat-completion request per form submission to an
//! OpenAI-compatible endpoint and returns the first completion's text.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;

/// Errors surfaced by the inference client
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// Credential absent or empty; no request was attempted
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Network or endpoint failure, including non-2xx responses
    #[error("request failed: {0}")]
    Request(String),
}

/// Interface for sending chat-style prompts to a model service.
///
/// Implementors encapsulate transport and vendor-specific API details so the
/// consultation flow stays decoupled from any particular HTTP client.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` message followed by a `user` prompt and return the
    /// assistant's response text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, InferenceError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

// ============================================================================
// CompletionClient - reqwest-backed ChatClient
// ============================================================================

const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.7;

// One shared client; the 120 s timeout is the only tuning applied.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .unwrap_or_default()
});

/// Chat-completion client for an OpenAI-compatible endpoint
pub struct CompletionClient {
    config: ApiConfig,
}

impl CompletionClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ChatClient for CompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, InferenceError> {
        // Credential check happens before any network I/O.
        if self.config.api_key.trim().is_empty() {
            return Err(InferenceError::Configuration(
                "API key is empty".to_string(),
            ));
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = HTTP_CLIENT
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Request(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::Request(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(InferenceError::Request(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        extract_completion(&body)
    }
}

/// Parse a chat-completion response body and pull out the first choice's text.
fn extract_completion(body: &str) -> Result<String, InferenceError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| InferenceError::Request(format!("failed to parse response: {e}")))?;

    if let Some(error) = parsed.error {
        return Err(InferenceError::Request(error.message));
    }

    parsed
        .choices
        .and_then(|choices| choices.into_iter().next())
        .map(|choice| choice.message.content)
        .ok_or_else(|| InferenceError::Request("no completion in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_credential_is_configuration_error() {
        // base_url points nowhere reachable; the error must still be
        // Configuration because the key check precedes any network call.
        let config = ApiConfig::new("", "http://192.0.2.1/v1", "test-model");
        let client = CompletionClient::new(config);

        let result = client.complete("system", "user").await;
        assert!(matches!(result, Err(InferenceError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_whitespace_credential_is_configuration_error() {
        let config = ApiConfig::new("   ", "http://192.0.2.1/v1", "test-model");
        let client = CompletionClient::new(config);

        let result = client.complete("system", "user").await;
        assert!(matches!(result, Err(InferenceError::Configuration(_))));
    }

    #[test]
    fn test_extract_completion_text() {
        let body = r#"{"choices":[{"message":{"content":"Drink water and rest."}}]}"#;
        let text = extract_completion(body).unwrap();
        assert_eq!(text, "Drink water and rest.");
    }

    #[test]
    fn test_extract_completion_api_error() {
        let body = r#"{"error":{"message":"invalid model"}}"#;
        let result = extract_completion(body);
        match result {
            Err(InferenceError::Request(msg)) => assert_eq!(msg, "invalid model"),
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_completion_empty_choices() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(
            extract_completion(body),
            Err(InferenceError::Request(_))
        ));
    }

    #[test]
    fn test_extract_completion_malformed_json() {
        assert!(matches!(
            extract_completion("not json"),
            Err(InferenceError::Request(_))
        ));
    }
}
