//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every poll decision (dispatch, cooldown, hidden, in flight).
    pub log_poll_decisions: bool,

    /// Seed / append / reset of the profit history.
    pub log_history: bool,

    /// Per-game conversion during aggregation, including the large-move warning.
    pub log_aggregation: bool,

    /// Visibility transitions of the window / tab.
    pub log_visibility: bool,

    /// Registry adds, removals and cents toggles.
    pub log_registry: bool,

    /// Echo analytics events even when the sink is `off`.
    pub log_analytics: bool,

    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Round-trip time of each backend request.
    pub log_requests: bool,
}

pub const DF: LogFlags = LogFlags {
    log_poll_decisions: false,
    log_history: true,
    log_aggregation: true,
    log_visibility: true,
    log_registry: true,
    log_analytics: false,
    log_performance: false,
    log_requests: true,
};
