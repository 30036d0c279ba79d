// src/app/visibility.rs

use chrono::{DateTime, Utc};
use eframe::egui::Context;

use crate::engine::Visibility;

#[cfg(target_arch = "wasm32")]
use std::sync::mpsc::{self, Receiver};

/// One visibility transition and when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VisibilityChange {
    pub(crate) visibility: Visibility,
    pub(crate) at: DateTime<Utc>,
}

/// Tracks whether the window or tab can be seen.
/// In the browser no frames run while the tab is hidden, so transitions are captured by a
/// `visibilitychange` listener and replayed on the next frame with their own timestamps.
pub(crate) struct VisibilityWatch {
    last: Visibility,
    #[cfg(target_arch = "wasm32")]
    listener: Option<web::Listener>,
}

impl VisibilityWatch {
    pub(crate) fn new(ctx: &Context) -> Self {
        Self {
            last: observe(ctx),
            #[cfg(target_arch = "wasm32")]
            listener: web::Listener::register(ctx),
        }
    }

    pub(crate) fn current(&self) -> Visibility {
        self.last
    }

    /// Transitions since the previous call, oldest first.
    pub(crate) fn poll(&mut self, ctx: &Context, now: DateTime<Utc>) -> Vec<VisibilityChange> {
        #[cfg(target_arch = "wasm32")]
        let queued = self
            .listener
            .as_ref()
            .map(web::Listener::drain)
            .unwrap_or_default();
        #[cfg(not(target_arch = "wasm32"))]
        let queued = Vec::new();

        let changes = merge_changes(self.last, queued, observe(ctx), now);
        if let Some(change) = changes.last() {
            #[cfg(debug_assertions)]
            if crate::config::DF.log_visibility {
                log::info!("Visibility {:?} -> {:?}", self.last, changes);
            }
            self.last = change.visibility;
        }
        changes
    }
}

/// Queued transitions followed by a synthetic one when the live state disagrees with them.
fn merge_changes(
    last: Visibility,
    queued: Vec<VisibilityChange>,
    observed: Visibility,
    now: DateTime<Utc>,
) -> Vec<VisibilityChange> {
    let mut changes = queued;
    let latest = changes.last().map_or(last, |c| c.visibility);
    if latest != observed {
        changes.push(VisibilityChange {
            visibility: observed,
            at: now,
        });
    }
    changes
}

fn observe(ctx: &Context) -> Visibility {
    #[cfg(not(target_arch = "wasm32"))]
    let hidden = ctx.input(|i| i.viewport().minimized.unwrap_or(false));

    #[cfg(target_arch = "wasm32")]
    let hidden = {
        let _ = ctx;
        web::document_hidden()
    };

    if hidden {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::{JsCast, closure::Closure};

    pub(super) fn document_hidden() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.visibility_state() == web_sys::VisibilityState::Hidden)
            .unwrap_or(false)
    }

    pub(super) struct Listener {
        rx: Receiver<VisibilityChange>,
        // Dropping the closure would detach the listener.
        _callback: Closure<dyn FnMut()>,
    }

    impl Listener {
        pub(super) fn register(ctx: &Context) -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let (tx, rx) = mpsc::channel();
            let ctx = ctx.clone();

            let callback = Closure::<dyn FnMut()>::new(move || {
                let visibility = if document_hidden() {
                    Visibility::Hidden
                } else {
                    Visibility::Visible
                };
                let _ = tx.send(VisibilityChange {
                    visibility,
                    at: Utc::now(),
                });
                ctx.request_repaint();
            });

            if let Err(err) = document
                .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
            {
                log::warn!("Could not watch tab visibility: {:?}", err);
                return None;
            }
            Some(Self {
                rx,
                _callback: callback,
            })
        }

        pub(super) fn drain(&self) -> Vec<VisibilityChange> {
            self.rx.try_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{PollController, PollDecision};
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()
    }

    fn change(visibility: Visibility, secs: i64) -> VisibilityChange {
        VisibilityChange {
            visibility,
            at: t0() + TimeDelta::seconds(secs),
        }
    }

    #[test]
    fn resume_after_suspended_frames_waits_one_interval() {
        let mut poller = PollController::new();
        poller.start(t0(), Visibility::Visible);
        assert_eq!(poller.poll_if_due(t0()), PollDecision::Dispatch);
        poller.complete();

        // The tab was hidden at +1 s and shown at +60 s; the first frame runs at +60 s.
        let frame = t0() + TimeDelta::seconds(60);
        let queued = vec![change(Visibility::Hidden, 1), change(Visibility::Visible, 60)];
        for c in merge_changes(Visibility::Visible, queued, Visibility::Visible, frame) {
            poller.set_visibility(c.visibility, c.at);
        }

        assert_eq!(poller.poll_if_due(frame), PollDecision::NotDue);
        assert_eq!(
            poller.poll_if_due(frame + TimeDelta::seconds(4)),
            PollDecision::NotDue
        );
        assert_eq!(
            poller.poll_if_due(frame + TimeDelta::seconds(5)),
            PollDecision::Dispatch
        );
    }

    #[test]
    fn live_state_fills_in_a_missed_transition() {
        let frame = t0() + TimeDelta::seconds(30);
        let changes = merge_changes(Visibility::Visible, Vec::new(), Visibility::Hidden, frame);
        assert_eq!(changes, vec![change(Visibility::Hidden, 30)]);
    }

    #[test]
    fn nothing_to_report_when_state_is_steady() {
        let changes = merge_changes(Visibility::Visible, Vec::new(), Visibility::Visible, t0());
        assert!(changes.is_empty());

        let queued = vec![change(Visibility::Hidden, 1), change(Visibility::Visible, 2)];
        let changes = merge_changes(Visibility::Visible, queued.clone(), Visibility::Visible, t0());
        assert_eq!(changes, queued);
    }
}
