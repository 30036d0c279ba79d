// app/phases/tracking.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::TrackingState};

impl PhaseView for TrackingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_tracking_state(ctx, self)
    }
}
