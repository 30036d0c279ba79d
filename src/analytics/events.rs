use serde::Serialize;
use serde_json::{Map, Value};
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::domain::{AliasSet, SessionRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AnalyticsEvent {
    StartTracking,
    StopTracking,
    GameAdded,
    GameRemoved,
    CentsToggled,
    Error,
}

/// Registry state attached to start / stop / error events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSnapshot {
    pub player_name: String,
    pub games_count: usize,
    pub aliases_count: usize,
    pub game_urls: Vec<String>,
    pub is_in_cents: Vec<bool>,
}

impl TrackingSnapshot {
    pub fn new(player_name: &str, sessions: &SessionRegistry, aliases: &AliasSet) -> Self {
        Self {
            player_name: player_name.trim().to_owned(),
            games_count: sessions.len(),
            aliases_count: aliases.len(),
            game_urls: sessions.urls(),
            is_in_cents: sessions.subunit_flags(),
        }
    }

    pub(crate) fn to_properties(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn event_names_are_unique_snake_case() {
        let names: Vec<&'static str> = AnalyticsEvent::iter().map(Into::into).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
        for name in &names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "{name}"
            );
        }
        assert_eq!(AnalyticsEvent::StartTracking.to_string(), "start_tracking");
        assert_eq!(AnalyticsEvent::CentsToggled.to_string(), "cents_toggled");
    }
}
