//! Core data types
//!
//! Session input collected from the form and the fixed condition catalog.

use serde::{Deserialize, Serialize};

/// Pre-existing conditions offered in the multi-select.
pub const CONDITION_CATALOG: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Asthma",
    "Heart disease",
    "Kidney disease",
    "Pregnancy",
    "Immunocompromised",
];

/// One form submission: free-text symptoms plus selected condition labels.
///
/// Created per submission and discarded after the page re-renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    pub symptoms: String,
    pub conditions: Vec<String>,
}

impl SessionInput {
    pub fn new(symptoms: impl Into<String>, conditions: Vec<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_input_creation() {
        let input = SessionInput::new("headache", vec!["Diabetes".to_string()]);
        assert_eq!(input.symptoms, "headache");
        assert_eq!(input.conditions, vec!["Diabetes"]);
    }

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!CONDITION_CATALOG.is_empty());
    }
}
