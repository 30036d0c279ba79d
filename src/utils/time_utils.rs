use chrono::{DateTime, Local, TimeDelta, Utc};

/// Monotonic instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const CLOCK_FORMAT: &str = "%H:%M";
    pub const CLOCK_FORMAT_SECS: &str = "%H:%M:%S";

    /// Config durations are stored as plain milliseconds; this is the one place they become deltas.
    pub fn delta_ms(ms: i64) -> TimeDelta {
        TimeDelta::milliseconds(ms)
    }
}

/// Hour:minute label in the viewer's local timezone (chart axis).
pub fn format_clock(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format(TimeUtils::CLOCK_FORMAT)
        .to_string()
}

/// Hour:minute:second label in local time (status bar, debug overlay).
pub fn format_clock_secs(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format(TimeUtils::CLOCK_FORMAT_SECS)
        .to_string()
}

/// Chart x-values are epoch seconds.
pub fn epoch_secs(ts: DateTime<Utc>) -> f64 {
    ts.timestamp_millis() as f64 / TimeUtils::MS_IN_S as f64
}

pub fn epoch_secs_to_clock(secs: f64) -> String {
    DateTime::from_timestamp_millis((secs * TimeUtils::MS_IN_S as f64) as i64)
        .map(format_clock)
        .unwrap_or_default()
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h {}m", hours, mins % 60);
    }
    let days = hours / 24;
    format!("{}d {}h", days, hours % 24)
}
