//! Symptom entry form: free-text input, condition multi-select, submit

use crate::app::{AppState, CheckState};
use crate::checker::run_consultation;
use crate::types::{SessionInput, CONDITION_CATALOG};
use dioxus::prelude::*;

#[component]
pub fn CheckerForm() -> Element {
    let app_state = use_context::<AppState>();
    let mut symptoms = use_signal(String::new);
    let selected = use_signal(Vec::<String>::new);

    let is_checking = matches!(*app_state.check_state.read(), CheckState::Checking);
    let can_submit = !is_checking && !symptoms().trim().is_empty();

    let handle_submit = {
        let app_state = app_state.clone();
        let selected = selected.clone();
        move |_| {
            if !can_submit {
                return;
            }

            let input = SessionInput::new(symptoms().trim().to_string(), selected());
            let client = app_state.client.clone();
            let mut check_state = app_state.check_state.clone();

            // Form stays disabled until the one outstanding request resolves.
            check_state.set(CheckState::Checking);

            spawn(async move {
                let result = run_consultation(client.as_ref(), &input).await;
                check_state.set(result);
            });
        }
    };

    rsx! {
        div {
            label { class: "field-label", r#for: "symptoms", "What symptoms are you experiencing?" }
            textarea {
                id: "symptoms",
                class: "symptom-input",
                placeholder: "e.g. headache and fever since yesterday evening...",
                value: "{symptoms}",
                disabled: is_checking,
                oninput: move |evt| symptoms.set(evt.value()),
            }

            label { class: "field-label", "Pre-existing conditions" }
            div { class: "condition-list",
                for condition in CONDITION_CATALOG.iter().copied() {
                    ConditionCheckbox {
                        key: "{condition}",
                        label: condition,
                        selected,
                        disabled: is_checking,
                    }
                }
            }

            button {
                class: "submit-button",
                disabled: !can_submit,
                onclick: handle_submit,
                if is_checking { "Checking..." } else { "Check symptoms" }
            }
        }
    }
}

#[component]
fn ConditionCheckbox(label: &'static str, selected: Signal<Vec<String>>, disabled: bool) -> Element {
    let mut selected = selected;
    let is_checked = selected.read().iter().any(|c| c == label);

    rsx! {
        label { class: "condition",
            input {
                r#type: "checkbox",
                checked: is_checked,
                disabled,
                onchange: move |_| {
                    let mut list = selected.write();
                    if let Some(pos) = list.iter().position(|c| c == label) {
                        list.remove(pos);
                    } else {
                        list.push(label.to_string());
                    }
                },
            }
            span { "{label}" }
        }
    }
}
