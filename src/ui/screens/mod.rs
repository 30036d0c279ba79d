mod setup;
mod tracking;

pub(crate) use setup::{SetupAction, SetupView, render_setup};
pub(crate) use tracking::{TrackingAction, TrackingView, render_tracking};
