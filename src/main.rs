//! Symptomate launcher
//!
//! Loads `.env`, initializes logging, and starts the Dioxus desktop app.

use symptomate::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting symptomate");
    dioxus::launch(App);
}
