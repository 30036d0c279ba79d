use {
    chrono::{DateTime, Utc},
    eframe::{
        Frame,
        egui::{Context, Key, Visuals},
    },
    std::{mem, sync::Arc, time::Duration},
};

use crate::{
    Cli,
    analytics::{Analytics, TrackingSnapshot},
    app::{
        AppState, PhaseView, RegistryForms, SetupState, TrackingState,
        flow::{check_start, finish_poll, resolve_verification},
        visibility::VisibilityWatch,
    },
    config::POLLING,
    data::{ClientError, HttpResultsClient, ResultsRequest, ResultsResponse},
    domain::{AliasSet, SessionRegistry},
    engine::{JobPurpose, JobRequest, JobResult, PollDecision, ResultsWorker, Tracker},
    ui::{
        RegistryEvent, SetupAction, SetupView, TrackingAction, TrackingView, UI_CONFIG,
        debug_lines, render_debug_overlay, render_setup, render_tracking,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub struct App {
    pub(crate) player_name: String,
    pub(crate) sessions: SessionRegistry,
    pub(crate) aliases: AliasSet,
    pub(crate) forms: RegistryForms,
    pub(crate) show_debug_overlay: bool,
    worker: ResultsWorker,
    analytics: Analytics,
    visibility: VisibilityWatch,
    /// Bumped on every start / stop so late answers from a previous run are ignored.
    generation: u64,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let client = HttpResultsClient::new(&args.api_url);
        log::info!("Results endpoint: {}", client.endpoint());

        Self {
            player_name: String::new(),
            sessions: SessionRegistry::new(),
            aliases: AliasSet::new(),
            forms: RegistryForms::default(),
            show_debug_overlay: false,
            worker: ResultsWorker::new(Arc::new(client)),
            analytics: Analytics::new(args.analytics),
            visibility: VisibilityWatch::new(&cc.egui_ctx),
            generation: 0,
            state: AppState::default(),
        }
    }

    fn snapshot(&self) -> TrackingSnapshot {
        TrackingSnapshot::new(&self.player_name, &self.sessions, &self.aliases)
    }

    fn submit_job(&self, purpose: JobPurpose) {
        self.worker.submit(JobRequest {
            purpose,
            generation: self.generation,
            request: ResultsRequest::new(&self.player_name, &self.sessions, &self.aliases),
        });
    }

    /// Worker results for the current run and the given phase. Everything else is stale.
    fn drain_current(&self, purpose: JobPurpose) -> Vec<JobResult> {
        self.worker
            .drain()
            .into_iter()
            .filter(|r| {
                let current = r.purpose == purpose && r.generation == self.generation;
                #[cfg(debug_assertions)]
                if DF.log_requests {
                    log::info!(
                        "{:?} result gen {} in {}ms{}",
                        r.purpose,
                        r.generation,
                        r.duration_ms,
                        if current { "" } else { " (stale, dropped)" }
                    );
                }
                current
            })
            .collect()
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let toggle = ctx.input(|i| {
            i.modifiers.command && i.modifiers.shift && i.key_pressed(Key::D)
        });
        if toggle {
            self.show_debug_overlay = !self.show_debug_overlay;
        }
    }

    /// Applies one add / remove / toggle. Returns true when a registry actually changed.
    pub(crate) fn apply_registry_event(
        &mut self,
        event: RegistryEvent,
        tracker: Option<&mut Tracker>,
        now: DateTime<Utc>,
    ) -> bool {
        #[cfg(debug_assertions)]
        if DF.log_registry {
            log::info!("Registry event: {:?}", event);
        }

        let changed = match event {
            RegistryEvent::AddGame(raw) => match self.sessions.add(&raw) {
                Ok(session) => {
                    self.analytics.game_added(&session.url, session.uses_subunits);
                    self.forms.game_url.clear();
                    self.forms.game_url_error = None;
                    true
                }
                Err(err) => {
                    self.forms.game_url_error = Some(err.to_string());
                    false
                }
            },
            RegistryEvent::RemoveGame(url) => {
                let removed = self.sessions.remove(&url).is_some();
                if removed {
                    self.analytics.game_removed(&url);
                }
                removed
            }
            RegistryEvent::ToggleCents(url) => match self.sessions.toggle_subunits(&url) {
                Some(uses_subunits) => {
                    self.analytics.cents_toggled(&url, uses_subunits);
                    true
                }
                None => false,
            },
            RegistryEvent::AddAlias(raw) => match self.aliases.add(&raw) {
                Ok(_) => {
                    self.forms.alias.clear();
                    self.forms.alias_error = None;
                    true
                }
                Err(err) => {
                    self.forms.alias_error = Some(err.to_string());
                    false
                }
            },
            RegistryEvent::RemoveAlias(alias) => self.aliases.remove(&alias),
        };

        if changed {
            if let Some(tracker) = tracker {
                tracker.on_registry_changed(&self.sessions, now);
                tracker.clear_error();
            }
        }
        changed
    }

    /// Validates the form and sends the one-off verification request.
    fn begin_verification(&mut self, state: &mut SetupState) {
        if !check_start(&self.player_name, &self.sessions, &mut self.forms) {
            return;
        }
        state.verifying = true;
        self.submit_job(JobPurpose::Verify);
    }

    /// Returns the tracking phase when the backend accepted the request.
    fn finish_verification(
        &mut self,
        outcome: Result<ResultsResponse, ClientError>,
        now: DateTime<Utc>,
    ) -> Option<AppState> {
        let snapshot = self.snapshot();
        if !resolve_verification(outcome, &snapshot, &self.analytics, &mut self.forms) {
            return None;
        }
        self.generation += 1;

        let mut tracker = Tracker::new();
        tracker.start(now, self.visibility.current());
        log::info!(
            "Tracking {} game(s) for {}",
            self.sessions.len(),
            snapshot.player_name
        );
        Some(AppState::Tracking(TrackingState { tracker }))
    }

    pub(crate) fn tick_setup_state(&mut self, ctx: &Context, state: &mut SetupState) -> AppState {
        let now = Utc::now();
        self.handle_global_shortcuts(ctx);
        // No timer runs here; only the latest state matters for the next start.
        self.visibility.poll(ctx, now);

        for result in self.drain_current(JobPurpose::Verify) {
            state.verifying = false;
            if let Some(next) = self.finish_verification(result.outcome, now) {
                ctx.request_repaint();
                return next;
            }
        }

        let actions = crate::trace_time!("render_setup", 2000, {
            render_setup(
                ctx,
                SetupView {
                    player_name: &mut self.player_name,
                    forms: &mut self.forms,
                    sessions: &self.sessions,
                    aliases: &self.aliases,
                    verifying: state.verifying,
                },
            )
        });

        for action in actions {
            match action {
                SetupAction::Registry(event) => {
                    self.apply_registry_event(event, None, now);
                }
                SetupAction::Start if !state.verifying => self.begin_verification(state),
                SetupAction::Start => {}
            }
        }

        if state.verifying {
            ctx.request_repaint_after(Duration::from_millis(POLLING.in_flight_repaint_ms));
        }
        AppState::Setup(mem::take(state))
    }

    pub(crate) fn tick_tracking_state(
        &mut self,
        ctx: &Context,
        state: &mut TrackingState,
    ) -> AppState {
        let now = Utc::now();
        self.handle_global_shortcuts(ctx);

        for result in self.drain_current(JobPurpose::Poll) {
            finish_poll(
                &mut state.tracker,
                result.outcome,
                &self.sessions,
                &self.analytics,
                &self.snapshot(),
                now,
            );
        }

        // Changes recorded while no frames ran are replayed at their own timestamps.
        for change in self.visibility.poll(ctx, now) {
            state.tracker.set_visibility(change.visibility, change.at);
        }
        if state.tracker.poll_if_due(now) == PollDecision::Dispatch {
            self.submit_job(JobPurpose::Poll);
        }

        let actions = crate::trace_time!("render_tracking", 2000, {
            render_tracking(
                ctx,
                TrackingView {
                    player_name: self.player_name.trim(),
                    forms: &mut self.forms,
                    sessions: &self.sessions,
                    aliases: &self.aliases,
                    tracker: &state.tracker,
                },
            )
        });

        if self.show_debug_overlay {
            render_debug_overlay(ctx, &debug_lines(self.sessions.len(), &state.tracker));
        }

        for action in actions {
            match action {
                TrackingAction::Registry(event) => {
                    self.apply_registry_event(event, Some(&mut state.tracker), now);
                }
                TrackingAction::Stop => return self.stop_tracking(&mut state.tracker),
            }
        }

        let poller = state.tracker.poller();
        if poller.in_flight() {
            ctx.request_repaint_after(Duration::from_millis(POLLING.in_flight_repaint_ms));
        } else if let Some(wait) = poller.time_until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }
        AppState::Tracking(mem::take(state))
    }

    fn stop_tracking(&mut self, tracker: &mut Tracker) -> AppState {
        self.analytics.stop_tracking(
            &self.snapshot(),
            tracker.started_at(),
            tracker.total_profit(&self.sessions),
            tracker.has_errors(),
        );
        tracker.stop();
        self.generation += 1;
        log::info!("Tracking stopped");
        AppState::Setup(SetupState::default())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Setup(mut s) => s.tick(self, ctx),
            AppState::Tracking(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
