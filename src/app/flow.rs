//! Start-button and poll-completion decisions, kept free of egui.

use chrono::{DateTime, Utc};

use crate::{
    analytics::{Analytics, TrackingSnapshot},
    app::RegistryForms,
    data::{ClientError, ResultsResponse},
    domain::{HistoryUpdate, SessionRegistry},
    engine::Tracker,
    ui::UI_TEXT,
};

/// Form checks run before any request is sent. Errors land next to the offending field.
pub(crate) fn check_start(
    player_name: &str,
    sessions: &SessionRegistry,
    forms: &mut RegistryForms,
) -> bool {
    forms.player_name_error = None;
    if player_name.trim().is_empty() {
        forms.player_name_error = Some(UI_TEXT.err_player_name.clone());
        return false;
    }
    if sessions.is_empty() {
        forms.game_url_error = Some(UI_TEXT.err_no_games.clone());
        return false;
    }
    true
}

/// Judges the verification answer. Returns true when tracking may begin.
pub(crate) fn resolve_verification(
    outcome: Result<ResultsResponse, ClientError>,
    snapshot: &TrackingSnapshot,
    analytics: &Analytics,
    forms: &mut RegistryForms,
) -> bool {
    match outcome {
        Err(err) => {
            log::warn!("Verification request failed: {}", err);
            let message = format!("{}{}", UI_TEXT.err_start_prefix, err);
            analytics.error(&message, snapshot);
            forms.player_name_error = Some(message);
            false
        }
        Ok(ResultsResponse {
            error: Some(message),
            ..
        }) => {
            analytics.error(&message, snapshot);
            forms.player_name_error = Some(message);
            false
        }
        Ok(_) => {
            analytics.start_tracking(snapshot);
            forms.clear_errors();
            true
        }
    }
}

/// Hands one poll outcome to the tracker. A backend `error` is reported to analytics
/// only when it differs from the message already on screen.
pub(crate) fn finish_poll(
    tracker: &mut Tracker,
    outcome: Result<ResultsResponse, ClientError>,
    sessions: &SessionRegistry,
    analytics: &Analytics,
    snapshot: &TrackingSnapshot,
    now: DateTime<Utc>,
) -> Option<HistoryUpdate> {
    let backend_error = match &outcome {
        Ok(ResultsResponse {
            error: Some(message),
            ..
        }) => Some(message.clone()),
        _ => None,
    };
    let shown_before = tracker.error().map(str::to_owned);

    let update = tracker.complete_poll(outcome, sessions, now);
    if let Some(message) = backend_error {
        if shown_before.as_deref() != Some(message.as_str()) {
            analytics.error(&message, snapshot);
        }
    }
    update
}
