use chrono::{DateTime, Utc};

use crate::config::{DF, POLLING};
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub aggregate_profit: f64,
}

impl HistoryPoint {
    pub fn new(timestamp: DateTime<Utc>, aggregate_profit: f64) -> Self {
        Self {
            timestamp,
            aggregate_profit,
        }
    }
}

/// What `ProfitHistory::record` / `reset` did to the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    Seeded,
    Appended,
    Unchanged,
    Reset,
}

/// Time series of aggregate profit for the chart.
/// Timestamps never go backwards, and once seeded the series always holds at least two points.
#[derive(Debug, Clone, Default)]
pub struct ProfitHistory {
    points: Vec<HistoryPoint>,
}

impl ProfitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the total of one successful poll into the series.
    pub fn record(&mut self, total: f64, now: DateTime<Utc>) -> HistoryUpdate {
        let Some(last) = self.points.last().copied() else {
            self.seed(total, now);
            #[cfg(debug_assertions)]
            if DF.log_history {
                log::info!("History seeded with total {:.2}", total);
            }
            return HistoryUpdate::Seeded;
        };

        let elapsed_ms = (now - last.timestamp).num_milliseconds();
        let changed = total != last.aggregate_profit;
        if !changed && elapsed_ms < POLLING.history_heartbeat_ms {
            return HistoryUpdate::Unchanged;
        }

        // Wall clock stepping backwards must not break ordering.
        let timestamp = now.max(last.timestamp);
        self.points.push(HistoryPoint::new(timestamp, total));

        #[cfg(debug_assertions)]
        if DF.log_history {
            log::info!(
                "History append #{}: {:.2} ({})",
                self.points.len(),
                total,
                if changed { "changed" } else { "heartbeat" }
            );
        }
        HistoryUpdate::Appended
    }

    /// Drops every point and starts over from `now`.
    pub fn reset(&mut self, total: f64, now: DateTime<Utc>) -> HistoryUpdate {
        #[cfg(debug_assertions)]
        if DF.log_history {
            log::info!(
                "History reset: discarding {} points, reseeding at {:.2}",
                self.points.len(),
                total
            );
        }
        self.points.clear();
        self.seed(total, now);
        HistoryUpdate::Reset
    }

    fn seed(&mut self, total: f64, now: DateTime<Utc>) {
        let baseline = now - TimeUtils::delta_ms(POLLING.baseline_offset_ms);
        self.points.push(HistoryPoint::new(baseline, 0.0));
        self.points.push(HistoryPoint::new(now, total));
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&HistoryPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()
    }

    #[test]
    fn first_record_seeds_baseline_and_current() {
        let mut history = ProfitHistory::new();
        assert_eq!(history.record(42.0, t0()), HistoryUpdate::Seeded);
        assert_eq!(
            history.points(),
            &[
                HistoryPoint::new(t0() - TimeDelta::minutes(5), 0.0),
                HistoryPoint::new(t0(), 42.0),
            ]
        );
    }

    #[test]
    fn unchanged_total_is_only_sampled_on_heartbeat() {
        let mut history = ProfitHistory::new();
        history.record(42.0, t0());

        assert_eq!(
            history.record(42.0, t0() + TimeDelta::seconds(10)),
            HistoryUpdate::Unchanged
        );
        assert_eq!(history.len(), 2);

        assert_eq!(
            history.record(42.0, t0() + TimeDelta::seconds(61)),
            HistoryUpdate::Appended
        );
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn changed_total_appends_immediately() {
        let mut history = ProfitHistory::new();
        history.record(42.0, t0());
        assert_eq!(
            history.record(40.5, t0() + TimeDelta::seconds(5)),
            HistoryUpdate::Appended
        );
        assert_eq!(history.last().unwrap().aggregate_profit, 40.5);
    }

    #[test]
    fn appends_never_move_backwards_in_time() {
        let mut history = ProfitHistory::new();
        history.record(1.0, t0());
        history.record(2.0, t0() - TimeDelta::seconds(30));
        let stamps: Vec<_> = history.points().iter().map(|p| p.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reset_discards_and_reseeds() {
        let mut history = ProfitHistory::new();
        history.record(42.0, t0());
        history.record(50.0, t0() + TimeDelta::seconds(5));
        history.record(60.0, t0() + TimeDelta::seconds(10));

        let later = t0() + TimeDelta::minutes(2);
        assert_eq!(history.reset(0.6, later), HistoryUpdate::Reset);
        assert_eq!(
            history.points(),
            &[
                HistoryPoint::new(later - TimeDelta::minutes(5), 0.0),
                HistoryPoint::new(later, 0.6),
            ]
        );
    }
}
