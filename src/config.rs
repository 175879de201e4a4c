//! API configuration
//!
//! Loads the inference credential and endpoint settings once at startup.

use std::env;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "SYMPTOM_CHECKER_API_KEY";
/// Optional override for the chat-completion endpoint base URL.
pub const BASE_URL_VAR: &str = "SYMPTOM_CHECKER_BASE_URL";
/// Optional override for the model identifier.
pub const MODEL_VAR: &str = "SYMPTOM_CHECKER_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Errors raised while reading configuration at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing API key: set SYMPTOM_CHECKER_API_KEY in the environment or a .env file")]
    MissingApiKey,
}

/// Immutable inference configuration, loaded once per process
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Credential for the hosted inference endpoint
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API (no trailing slash)
    pub base_url: String,
    /// Model identifier sent with each request
    pub model: String,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    ///
    /// The key may still be empty here; the client rejects empty credentials
    /// before any request is attempted.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;

        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = env::var(MODEL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Placeholder config used when the environment has no key.
    ///
    /// The client rejects the empty credential at submission time, which is
    /// how the missing key is surfaced to the user.
    pub fn unconfigured() -> Self {
        Self::new("", DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    /// Build a config directly, normalizing the base URL
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ApiConfig::new("sk-test", "https://api.example.com/v1/", "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn test_new_keeps_clean_base_url() {
        let config = ApiConfig::new("sk-test", "https://api.example.com/v1", "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }
}
