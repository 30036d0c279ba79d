// src/app/state.rs

use crate::engine::Tracker;

pub(crate) enum AppState {
    Setup(SetupState),
    Tracking(TrackingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Setup(SetupState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct SetupState {
    /// A verification request is out; Start stays disabled until it answers.
    pub(crate) verifying: bool,
}

#[derive(Default, Clone)]
pub(crate) struct TrackingState {
    pub(crate) tracker: Tracker,
}

/// Text inputs and their inline validation messages. Shared by both phases.
#[derive(Debug, Default, Clone)]
pub struct RegistryForms {
    pub game_url: String,
    pub alias: String,
    pub game_url_error: Option<String>,
    pub alias_error: Option<String>,
    pub player_name_error: Option<String>,
}

impl RegistryForms {
    pub(crate) fn clear_errors(&mut self) {
        self.game_url_error = None;
        self.alias_error = None;
        self.player_name_error = None;
    }
}
