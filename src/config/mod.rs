//! Configuration module for the tracker application.

// Can all be private because we have a public re-export.
mod api;
mod debug;
mod polling;
mod sessions;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
pub use polling::{POLLING, PollingConfig};
pub use sessions::{SESSIONS, SessionRules};
