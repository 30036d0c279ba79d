//! Cadence of the results poll loop and the history sampling rules.
use crate::utils::TimeUtils;

pub struct PollingConfig {
    /// Timer cadence of the poll loop.
    pub tick_interval_ms: i64,
    /// Minimum gap between two attempts, measured from the previous attempt (not its completion).
    pub min_attempt_gap_ms: i64,
    /// An unchanged total is still re-sampled once this much time has passed since the last point.
    pub history_heartbeat_ms: i64,
    /// Offset of the synthetic zero point that opens every fresh history.
    pub baseline_offset_ms: i64,
    /// Lead-in used by the chart when it only has a single point to draw.
    pub chart_lead_in_ms: i64,
    /// Raw per-game moves above this are logged (debug builds only).
    pub large_change_threshold: f64,
    /// Repaint cadence while a request is in flight so the result is picked up promptly.
    pub in_flight_repaint_ms: u64,
}

pub const POLLING: PollingConfig = PollingConfig {
    tick_interval_ms: TimeUtils::MS_IN_S * 5,
    min_attempt_gap_ms: 4_500,
    history_heartbeat_ms: TimeUtils::MS_IN_MIN,
    baseline_offset_ms: TimeUtils::MS_IN_5_MIN,
    chart_lead_in_ms: TimeUtils::MS_IN_15_MIN,
    large_change_threshold: 1000.0,
    in_flight_repaint_ms: 100,
};
