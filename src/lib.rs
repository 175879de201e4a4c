//! Symptomate Library
//!
//! Core library for the Symptomate desktop application: a single-page
//! symptom checker backed by a hosted chat-completion endpoint.

pub mod app;
pub mod checker;
pub mod config;
pub mod inference;
pub mod prompt;
pub mod types;
pub mod ui;
