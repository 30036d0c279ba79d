//! Product analytics port. Events are fire-and-forget: a sink may drop them, and nothing
//! in the app ever waits on or branches on an emit.

mod events;
mod sink;

pub use events::{AnalyticsEvent, TrackingSnapshot};
pub use sink::{AnalyticsMode, AnalyticsSink, LogSink, NoopSink};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Typed front door over an injected sink.
pub struct Analytics {
    sink: Box<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(mode: AnalyticsMode) -> Self {
        let sink: Box<dyn AnalyticsSink> = match mode {
            AnalyticsMode::Log => Box::new(LogSink::new()),
            AnalyticsMode::Off => Box::new(NoopSink),
        };
        Self::with_sink(sink)
    }

    pub fn with_sink(sink: Box<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    pub fn start_tracking(&self, snapshot: &TrackingSnapshot) {
        self.emit(AnalyticsEvent::StartTracking, snapshot.to_properties());
    }

    pub fn stop_tracking(
        &self,
        snapshot: &TrackingSnapshot,
        started_at: Option<DateTime<Utc>>,
        final_profit: f64,
        has_errors: bool,
    ) {
        let duration_s = started_at
            .map(|t| (Utc::now() - t).num_seconds().max(0))
            .unwrap_or(0);
        let mut props = snapshot.to_properties();
        props.insert("duration".into(), json!(duration_s));
        props.insert("finalProfit".into(), json!(final_profit));
        props.insert("hasErrors".into(), json!(has_errors));
        self.emit(AnalyticsEvent::StopTracking, props);
    }

    pub fn game_added(&self, url: &str, uses_subunits: bool) {
        self.emit(
            AnalyticsEvent::GameAdded,
            object(json!({ "gameUrl": url, "isInCents": uses_subunits })),
        );
    }

    pub fn game_removed(&self, url: &str) {
        self.emit(AnalyticsEvent::GameRemoved, object(json!({ "gameUrl": url })));
    }

    pub fn cents_toggled(&self, url: &str, uses_subunits: bool) {
        self.emit(
            AnalyticsEvent::CentsToggled,
            object(json!({ "gameUrl": url, "isInCents": uses_subunits })),
        );
    }

    pub fn error(&self, message: &str, snapshot: &TrackingSnapshot) {
        self.emit(
            AnalyticsEvent::Error,
            object(json!({
                "error": message,
                "context": {
                    "playerName": snapshot.player_name,
                    "gameUrls": snapshot.game_urls,
                    "aliasesCount": snapshot.aliases_count,
                },
            })),
        );
    }

    fn emit(&self, event: AnalyticsEvent, mut props: Map<String, Value>) {
        props.insert("timestamp".into(), json!(Utc::now().to_rfc3339()));

        #[cfg(debug_assertions)]
        if DF.log_analytics {
            log::info!("analytics {} {}", event, Value::Object(props.clone()));
        }
        self.sink.emit(event, Value::Object(props));
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    pub(crate) type Recorded = Arc<Mutex<Vec<(AnalyticsEvent, Value)>>>;

    /// Keeps every emitted event for inspection.
    pub(crate) struct RecordingSink(pub(crate) Recorded);

    impl AnalyticsSink for RecordingSink {
        fn emit(&self, event: AnalyticsEvent, properties: Value) {
            self.0.lock().unwrap().push((event, properties));
        }
    }

    pub(crate) fn recording() -> (Analytics, Recorded) {
        let recorded = Recorded::default();
        let analytics = Analytics::with_sink(Box::new(RecordingSink(recorded.clone())));
        (analytics, recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::recording;
    use super::*;
    use crate::domain::{AliasSet, SessionRegistry};

    fn snapshot() -> TrackingSnapshot {
        let mut sessions = SessionRegistry::new();
        sessions.add("https://www.pokernow.club/games/a").unwrap();
        sessions.add("https://www.pokernow.club/games/b").unwrap();
        sessions.toggle_subunits("https://www.pokernow.club/games/b");
        let mut aliases = AliasSet::new();
        aliases.add("villain").unwrap();
        TrackingSnapshot::new(" hero ", &sessions, &aliases)
    }

    #[test]
    fn start_tracking_carries_registry_snapshot() {
        let (analytics, recorded) = recording();
        analytics.start_tracking(&snapshot());

        let events = recorded.lock().unwrap();
        let (event, props) = &events[0];
        assert_eq!(event.to_string(), "start_tracking");
        assert_eq!(props["playerName"], "hero");
        assert_eq!(props["gamesCount"], 2);
        assert_eq!(props["aliasesCount"], 1);
        assert_eq!(props["isInCents"], json!([false, true]));
        assert!(props["timestamp"].is_string());
    }

    #[test]
    fn stop_tracking_adds_outcome_fields() {
        let (analytics, recorded) = recording();
        analytics.stop_tracking(&snapshot(), Some(Utc::now()), -12.5, true);

        let events = recorded.lock().unwrap();
        let (event, props) = &events[0];
        assert_eq!(*event, AnalyticsEvent::StopTracking);
        assert_eq!(props["finalProfit"], -12.5);
        assert_eq!(props["hasErrors"], true);
        assert!(props["duration"].as_i64().unwrap() >= 0);
        assert_eq!(props["gameUrls"][1], "https://www.pokernow.club/games/b");
    }

    #[test]
    fn registry_events_use_snake_case_names() {
        let (analytics, recorded) = recording();
        analytics.game_added("https://www.pokernow.club/games/a", false);
        analytics.cents_toggled("https://www.pokernow.club/games/a", true);
        analytics.game_removed("https://www.pokernow.club/games/a");
        analytics.error("Player not found", &snapshot());

        let names: Vec<String> = recorded
            .lock()
            .unwrap()
            .iter()
            .map(|(e, _)| e.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["game_added", "cents_toggled", "game_removed", "error"]
        );
    }
}
