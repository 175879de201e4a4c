//! Prompt assembly
//!
//! Turns a form submission into the instruction string sent to the model.

use crate::types::SessionInput;

/// Fixed system instruction sent with every request.
///
/// Asks for general, non-diagnostic guidance and explicit emergency flags.
pub const GUIDANCE_SYSTEM_PROMPT: &str = r#"You are a health information assistant. The user will describe their symptoms and list any pre-existing conditions.

RESPONSE RULES:
1. Provide general wellness guidance only - never a diagnosis or prescription
2. Take the listed pre-existing conditions into account
3. Clearly highlight any warning signs that warrant urgent medical attention
4. Use plain language and short bullet points
5. Always remind the user to consult a qualified clinician for medical advice"#;

/// Build the user prompt from the collected inputs.
///
/// The symptom text is embedded verbatim and every selected condition label
/// appears in the output. Pure string assembly, no failure modes.
pub fn build_prompt(input: &SessionInput) -> String {
    let conditions = if input.conditions.is_empty() {
        "none reported".to_string()
    } else {
        input.conditions.join(", ")
    };

    format!(
        "Symptoms described by the user:\n{}\n\nPre-existing conditions: {}\n\nPlease give general guidance, and call out anything that needs urgent care.",
        input.symptoms, conditions
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_symptoms_verbatim() {
        let input = SessionInput::new("sharp pain behind the left eye", vec![]);
        let prompt = build_prompt(&input);
        assert!(prompt.contains("sharp pain behind the left eye"));
    }

    #[test]
    fn test_prompt_contains_every_selected_condition() {
        let conditions = vec![
            "Diabetes".to_string(),
            "Asthma".to_string(),
            "Pregnancy".to_string(),
        ];
        let input = SessionInput::new("dizzy after standing up", conditions.clone());
        let prompt = build_prompt(&input);
        for label in &conditions {
            assert!(prompt.contains(label), "missing label: {label}");
        }
        assert!(prompt.contains("dizzy after standing up"));
    }

    #[test]
    fn test_prompt_with_no_conditions() {
        let input = SessionInput::new("mild cough", vec![]);
        let prompt = build_prompt(&input);
        assert!(prompt.contains("mild cough"));
        assert!(prompt.contains("none reported"));
    }

    #[test]
    fn test_scenario_headache_fever_diabetes() {
        let input = SessionInput::new("headache and fever", vec!["diabetes".to_string()]);
        let prompt = build_prompt(&input);
        assert!(prompt.contains("headache and fever"));
        assert!(prompt.contains("diabetes"));
    }

    #[test]
    fn test_system_prompt_mentions_urgent_care() {
        assert!(GUIDANCE_SYSTEM_PROMPT.contains("urgent"));
        assert!(GUIDANCE_SYSTEM_PROMPT.contains("never a diagnosis"));
    }
}
