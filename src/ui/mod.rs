//! UI components
//!
//! This module contains all user interface components built with Dioxus.

pub mod form;
pub mod output;

use dioxus::prelude::*;
use form::CheckerForm;
use output::OutputPanel;

/// Static disclaimer shown on every render, regardless of state.
pub const DISCLAIMER_TEXT: &str = "This tool provides general wellness information only. It is not \
     a medical device, does not diagnose conditions, and is no substitute for advice from a \
     qualified clinician. If you think you are experiencing an emergency, call your local \
     emergency number immediately.";

const APP_CSS: &str = r#"
:root {
    --bg-base: #11151A;
    --bg-elevated: #1B222B;
    --text-primary: #F2EDE7;
    --text-secondary: #9AA5B1;
    --accent-primary: #2A6B7C;
    --warning: #F59E0B;
    --error: #DC6B5A;
}
* { box-sizing: border-box; margin: 0; }
body {
    background: var(--bg-base);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, sans-serif;
    font-size: 15px;
}
.page { max-width: 720px; margin: 0 auto; padding: 24px 16px 48px; }
.page-title { font-size: 22px; font-weight: 600; margin-bottom: 4px; }
.page-subtitle { color: var(--text-secondary); font-size: 13px; margin-bottom: 20px; }
.disclaimer {
    background: rgba(245, 158, 11, 0.12);
    border: 1px solid var(--warning);
    border-radius: 10px;
    color: var(--text-primary);
    font-size: 13px;
    line-height: 1.5;
    padding: 12px 16px;
    margin-bottom: 20px;
}
.field-label { display: block; font-size: 13px; color: var(--text-secondary); margin: 14px 0 6px; }
.symptom-input {
    width: 100%;
    min-height: 96px;
    background: var(--bg-elevated);
    border: 1px solid #2A3440;
    border-radius: 10px;
    color: var(--text-primary);
    font: inherit;
    padding: 12px 14px;
    resize: vertical;
}
.condition-list { display: flex; flex-wrap: wrap; gap: 8px 16px; }
.condition { display: flex; align-items: center; gap: 6px; font-size: 14px; cursor: pointer; }
.submit-button {
    margin-top: 18px;
    background: var(--accent-primary);
    border: none;
    border-radius: 22px;
    color: var(--text-primary);
    cursor: pointer;
    font: inherit;
    font-weight: 600;
    padding: 10px 28px;
}
.submit-button:disabled { opacity: 0.4; cursor: not-allowed; }
.output-region {
    margin-top: 24px;
    background: var(--bg-elevated);
    border-radius: 10px;
    min-height: 72px;
    padding: 16px;
    white-space: pre-wrap;
    line-height: 1.6;
}
.output-hint { color: var(--text-secondary); font-size: 14px; }
.output-error { color: var(--error); }
.checking-row { display: flex; align-items: center; gap: 10px; color: var(--text-secondary); }
"#;

/// Page shell: title, disclaimer banner, form, and output region.
#[component]
pub fn Layout() -> Element {
    rsx! {
        style { "{APP_CSS}" }
        div { class: "page",
            h1 { class: "page-title", "Symptom Checker" }
            p { class: "page-subtitle", "General guidance from a hosted model. One request per submission." }

            DisclaimerBanner {}
            CheckerForm {}
            OutputPanel {}
        }
    }
}

/// Static disclaimer banner.
#[component]
pub fn DisclaimerBanner() -> Element {
    rsx! {
        div { class: "disclaimer", "{DISCLAIMER_TEXT}" }
    }
}
