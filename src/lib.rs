#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analytics;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
mod shared;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for track_cli.rs)
pub use analytics::AnalyticsMode;
pub use app::App;
pub use config::API;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the results backend
    #[arg(long, env = "TRACKER_API_URL", default_value = API.default_base_url)]
    pub api_url: String,

    /// Where product analytics events go
    #[arg(long, value_enum, default_value_t = AnalyticsMode::Log)]
    pub analytics: AnalyticsMode,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
