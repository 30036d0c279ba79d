use chrono::{DateTime, Utc};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::{ClientError, ResultsResponse, TrackingResults};
use crate::domain::{HistoryUpdate, LastObservedSettings, ProfitHistory, SessionRegistry};
use crate::engine::aggregate::aggregate_profit;
use crate::engine::poller::{PollController, PollDecision, Visibility};
use crate::ui::UI_TEXT;

/// Live tracking state: poll cadence, latest results, the chart history and the
/// current error line. All mutation happens on the caller's thread with an explicit `now`.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub(crate) poller: PollController,
    results: Option<TrackingResults>,
    history: ProfitHistory,
    observed: LastObservedSettings,
    error: Option<String>,
    is_loading: bool,
    started_at: Option<DateTime<Utc>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a clean slate and arms the timer for an immediate first poll.
    pub fn start(&mut self, now: DateTime<Utc>, visibility: Visibility) {
        *self = Self {
            started_at: Some(now),
            ..Self::default()
        };
        self.poller.start(now, visibility);
    }

    pub fn stop(&mut self) {
        self.poller.stop();
        self.is_loading = false;
    }

    /// Frame-driven poll. On `Dispatch` the caller must send exactly one request
    /// and hand its outcome to `complete_poll`.
    pub fn poll_if_due(&mut self, now: DateTime<Utc>) -> PollDecision {
        let decision = self.poller.poll_if_due(now);
        self.on_decision(decision);
        decision
    }

    /// Poll attempt driven by an external timer.
    pub fn attempt_poll(&mut self, now: DateTime<Utc>) -> PollDecision {
        let decision = self.poller.attempt(now);
        self.on_decision(decision);
        decision
    }

    fn on_decision(&mut self, decision: PollDecision) {
        if decision == PollDecision::Dispatch && !self.has_results() {
            self.is_loading = true;
        }
    }

    /// Applies the outcome of a dispatched request. Never fails; problems end up in `error`.
    pub fn complete_poll(
        &mut self,
        outcome: Result<ResultsResponse, ClientError>,
        sessions: &SessionRegistry,
        now: DateTime<Utc>,
    ) -> Option<HistoryUpdate> {
        self.poller.complete();
        self.is_loading = false;

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Results poll failed: {}", err);
                self.error = Some(format!("{}{}", UI_TEXT.err_server_prefix, err));
                return None;
            }
        };

        let mut update = None;
        match response.results {
            Some(results) => {
                self.results = Some(results);
                update = self.check_subunit_drift(sessions, now);
                if let Some(results) = &self.results {
                    self.observed.record(&results.results, sessions, now);
                    let total = aggregate_profit(&results.results, sessions);
                    update = Some(match self.history.record(total, now) {
                        HistoryUpdate::Unchanged if update.is_some() => HistoryUpdate::Reset,
                        other => other,
                    });
                }
                self.error = None;
            }
            None => {
                #[cfg(debug_assertions)]
                if DF.log_history {
                    log::info!("Poll returned no results");
                }
                self.error = Some(UI_TEXT.err_no_results.clone());
            }
        }

        if let Some(message) = response.error {
            log::warn!("Backend reported: {}", message);
            self.error = Some(message);
        }
        update
    }

    /// Resets the history if any game's cents flag changed since it was last observed.
    /// Runs after every registry mutation and every applied result.
    pub fn check_subunit_drift(
        &mut self,
        sessions: &SessionRegistry,
        now: DateTime<Utc>,
    ) -> Option<HistoryUpdate> {
        let results = self.results.as_ref()?;
        let drifted = self.observed.drifted(sessions);
        if drifted.is_empty() {
            return None;
        }

        #[cfg(debug_assertions)]
        if DF.log_history {
            log::info!("Cents setting changed for {:?}; resetting history", drifted);
        }
        let total = aggregate_profit(&results.results, sessions);
        self.observed.adopt_flags(sessions);
        Some(self.history.reset(total, now))
    }

    /// Call after any add / remove / toggle on the registries.
    pub fn on_registry_changed(
        &mut self,
        sessions: &SessionRegistry,
        now: DateTime<Utc>,
    ) -> Option<HistoryUpdate> {
        self.check_subunit_drift(sessions, now)
    }

    /// Aggregate of the latest results under the current flags.
    pub fn total_profit(&self, sessions: &SessionRegistry) -> f64 {
        self.results
            .as_ref()
            .map(|r| aggregate_profit(&r.results, sessions))
            .unwrap_or(0.0)
    }

    pub fn has_results(&self) -> bool {
        self.results.as_ref().is_some_and(|r| !r.results.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.results.as_ref().is_some_and(|r| r.has_errors)
    }

    pub fn results(&self) -> Option<&TrackingResults> {
        self.results.as_ref()
    }

    pub fn history(&self) -> &ProfitHistory {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn poller(&self) -> &PollController {
        &self.poller
    }

    pub fn set_visibility(&mut self, visibility: Visibility, now: DateTime<Utc>) -> bool {
        self.poller.set_visibility(visibility, now)
    }
}
