// app/phases/setup.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::SetupState};

impl PhaseView for SetupState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_setup_state(ctx, self)
    }
}
