//! Consultation flow
//!
//! Glue between the form and the inference client: builds the prompt, issues
//! exactly one request, and maps errors to the fixed user-facing messages.

use crate::app::CheckState;
use crate::inference::{ChatClient, InferenceError};
use crate::prompt::{build_prompt, GUIDANCE_SYSTEM_PROMPT};
use crate::types::SessionInput;

/// Shown when the credential is missing or empty.
pub const CONFIG_ERROR_MESSAGE: &str =
    "The app is not configured with an API key. Set SYMPTOM_CHECKER_API_KEY and restart.";

/// Shown on any network or endpoint failure.
pub const REQUEST_ERROR_MESSAGE: &str =
    "Something went wrong while contacting the service. Please try again.";

/// Run one consultation and return the state to render.
///
/// Errors are folded into fixed messages here so the UI never sees a raw
/// error, let alone a stack trace.
pub async fn run_consultation(client: &dyn ChatClient, input: &SessionInput) -> CheckState {
    let prompt = build_prompt(input);

    match client.complete(GUIDANCE_SYSTEM_PROMPT, &prompt).await {
        Ok(text) => CheckState::Answer(text),
        Err(InferenceError::Configuration(e)) => {
            tracing::error!("inference client misconfigured: {e}");
            CheckState::Failed(CONFIG_ERROR_MESSAGE.to_string())
        }
        Err(InferenceError::Request(e)) => {
            tracing::warn!("completion request failed: {e}");
            CheckState::Failed(REQUEST_ERROR_MESSAGE.to_string())
        }
    }
}
