use std::time::Duration;

use chrono::{DateTime, Utc};
use strum_macros::Display;

use crate::config::{DF, POLLING};
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Active { next_tick_at: DateTime<Utc> },
    /// Window / tab hidden. The timer is torn down until it becomes visible again.
    Paused,
}

/// Why a poll was or was not dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PollDecision {
    Dispatch,
    NotDue,
    Cooldown,
    Hidden,
    InFlight,
    Stopped,
}

/// Owns the poll cadence: the fixed timer, the attempt cooldown, visibility suppression
/// and the single in-flight slot. It never performs IO; callers dispatch on `Dispatch`
/// and report back with `complete`.
#[derive(Debug, Clone)]
pub struct PollController {
    timer: TimerState,
    visibility: Visibility,
    last_attempt_at: Option<DateTime<Utc>>,
    in_flight: bool,
}

impl Default for PollController {
    fn default() -> Self {
        Self {
            timer: TimerState::Stopped,
            visibility: Visibility::Visible,
            last_attempt_at: None,
            in_flight: false,
        }
    }
}

impl PollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer with the first tick due immediately.
    pub fn start(&mut self, now: DateTime<Utc>, visibility: Visibility) {
        self.visibility = visibility;
        self.last_attempt_at = None;
        self.in_flight = false;
        self.timer = match visibility {
            Visibility::Visible => TimerState::Active { next_tick_at: now },
            Visibility::Hidden => TimerState::Paused,
        };
    }

    pub fn stop(&mut self) {
        self.timer = TimerState::Stopped;
        self.in_flight = false;
    }

    /// Returns true when the timer changed state.
    pub fn set_visibility(&mut self, visibility: Visibility, now: DateTime<Utc>) -> bool {
        self.visibility = visibility;
        let next = match (self.timer, visibility) {
            (TimerState::Active { .. }, Visibility::Hidden) => TimerState::Paused,
            (TimerState::Paused, Visibility::Visible) => TimerState::Active {
                next_tick_at: now + Self::interval(),
            },
            _ => return false,
        };

        #[cfg(debug_assertions)]
        if DF.log_visibility {
            log::info!("Poll timer {:?} -> {:?} ({})", self.timer, next, visibility);
        }
        self.timer = next;
        true
    }

    /// Timer-driven entry point, called every frame. Consumes the tick when due.
    pub fn poll_if_due(&mut self, now: DateTime<Utc>) -> PollDecision {
        let next_tick_at = match self.timer {
            TimerState::Stopped => return PollDecision::Stopped,
            TimerState::Paused => return PollDecision::Hidden,
            TimerState::Active { next_tick_at } if now < next_tick_at => {
                return PollDecision::NotDue;
            }
            TimerState::Active { next_tick_at } => next_tick_at,
        };

        // Fixed cadence; a late frame does not cause a burst of catch-up ticks.
        let mut following = next_tick_at + Self::interval();
        if following <= now {
            following = now + Self::interval();
        }
        self.timer = TimerState::Active {
            next_tick_at: following,
        };
        self.attempt(now)
    }

    /// Gatekeeper for one attempt, independent of the timer.
    pub fn attempt(&mut self, now: DateTime<Utc>) -> PollDecision {
        let decision = if matches!(self.timer, TimerState::Stopped) {
            PollDecision::Stopped
        } else if self.visibility == Visibility::Hidden {
            PollDecision::Hidden
        } else if self.in_flight {
            PollDecision::InFlight
        } else if self
            .last_attempt_at
            .is_some_and(|t| (now - t).num_milliseconds() < POLLING.min_attempt_gap_ms)
        {
            PollDecision::Cooldown
        } else {
            self.last_attempt_at = Some(now);
            self.in_flight = true;
            PollDecision::Dispatch
        };

        #[cfg(debug_assertions)]
        if DF.log_poll_decisions {
            log::info!("Poll attempt: {}", decision);
        }
        decision
    }

    /// Frees the in-flight slot. Safe to call when nothing is in flight.
    pub fn complete(&mut self) {
        self.in_flight = false;
    }

    /// How long the frame loop may sleep before the next tick is due.
    pub fn time_until_next_tick(&self, now: DateTime<Utc>) -> Option<Duration> {
        match self.timer {
            TimerState::Active { next_tick_at } => {
                Some((next_tick_at - now).to_std().unwrap_or(Duration::ZERO))
            }
            TimerState::Stopped | TimerState::Paused => None,
        }
    }

    pub fn timer(&self) -> TimerState {
        self.timer
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_attempt_at(&self) -> Option<DateTime<Utc>> {
        self.last_attempt_at
    }

    fn interval() -> chrono::TimeDelta {
        TimeUtils::delta_ms(POLLING.tick_interval_ms)
    }
}
