//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::config::ApiConfig;
use crate::inference::{ChatClient, CompletionClient};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Represents the current state of a consultation
#[derive(Clone, PartialEq, Debug)]
pub enum CheckState {
    Idle,
    Checking,
    Answer(String),
    Failed(String),
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    pub check_state: Signal<CheckState>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("configuration incomplete: {e}");
            ApiConfig::unconfigured()
        });

        Self {
            client: Arc::new(CompletionClient::new(config)),
            check_state: Signal::new(CheckState::Idle),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_state_equality() {
        assert_eq!(CheckState::Idle, CheckState::Idle);
        assert_ne!(CheckState::Idle, CheckState::Checking);
        assert_eq!(
            CheckState::Answer("ok".to_string()),
            CheckState::Answer("ok".to_string())
        );
    }
}
