//! Response panel: idle hint, in-flight indicator, answer or error text

use crate::app::{AppState, CheckState};
use dioxus::prelude::*;

#[component]
pub fn OutputPanel() -> Element {
    let app_state = use_context::<AppState>();
    let state = app_state.check_state.read().clone();

    let body = match state {
        CheckState::Idle => rsx! {
            p { class: "output-hint", "Describe your symptoms above to get general guidance." }
        },
        CheckState::Checking => rsx! {
            div { class: "checking-row",
                span { "Contacting the model" }
                span { class: "animate-pulse", "..." }
            }
        },
        CheckState::Answer(text) => rsx! {
            div { "{text}" }
        },
        CheckState::Failed(message) => rsx! {
            div { class: "output-error", "{message}" }
        },
    };

    rsx! {
        div { class: "output-region", {body} }
    }
}
