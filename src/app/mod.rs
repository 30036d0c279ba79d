mod flow;
mod phases;
mod root;
mod state;
mod visibility;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, SetupState, TrackingState};
pub use state::RegistryForms;

pub use root::App;
