use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::{DF, POLLING};
use crate::domain::{ResultsMap, SessionRegistry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedSetting {
    pub profit: f64,
    pub uses_subunits: bool,
    pub observed_at: DateTime<Utc>,
}

/// Last numeric value and unit flag seen per game.
/// Only used to spot unit flips between polls; nothing is rendered from it.
#[derive(Debug, Clone, Default)]
pub struct LastObservedSettings {
    entries: HashMap<String, ObservedSetting>,
}

impl LastObservedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with the numeric entries of a successful poll for tracked games.
    pub fn record(&mut self, results: &ResultsMap, sessions: &SessionRegistry, now: DateTime<Utc>) {
        let mut next = HashMap::with_capacity(results.len());
        for (url, value) in results {
            let (Some(profit), Some(session)) = (value.numeric(), sessions.get(url)) else {
                continue;
            };

            #[cfg(debug_assertions)]
            if DF.log_aggregation {
                if let Some(previous) = self.entries.get(url) {
                    if (profit - previous.profit).abs() > POLLING.large_change_threshold {
                        log::warn!(
                            "Large move on {}: {} -> {} (cents: {})",
                            url,
                            previous.profit,
                            profit,
                            session.uses_subunits
                        );
                    }
                }
            }

            next.insert(
                url.clone(),
                ObservedSetting {
                    profit,
                    uses_subunits: session.uses_subunits,
                    observed_at: now,
                },
            );
        }
        self.entries = next;
    }

    /// Games whose current cents flag differs from the last one observed with a value.
    pub fn drifted(&self, sessions: &SessionRegistry) -> Vec<String> {
        sessions
            .iter()
            .filter(|s| {
                self.entries
                    .get(&s.url)
                    .is_some_and(|seen| seen.uses_subunits != s.uses_subunits)
            })
            .map(|s| s.url.clone())
            .collect()
    }

    /// Takes over the current flags so that one toggle is only acted upon once.
    pub fn adopt_flags(&mut self, sessions: &SessionRegistry) {
        for session in sessions.iter() {
            if let Some(seen) = self.entries.get_mut(&session.url) {
                seen.uses_subunits = session.uses_subunits;
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&ObservedSetting> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProfitValue;
    use chrono::TimeZone;

    const GAME: &str = "https://www.pokernow.club/games/abc";
    const BROKEN: &str = "https://www.pokernow.club/games/broken";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()
    }

    fn setup() -> (SessionRegistry, ResultsMap) {
        let mut sessions = SessionRegistry::new();
        sessions.add(GAME).unwrap();
        sessions.add(BROKEN).unwrap();
        let mut results = ResultsMap::new();
        results.insert(GAME.into(), ProfitValue::Numeric(250.0));
        results.insert(BROKEN.into(), ProfitValue::Failed("ERROR: timeout".into()));
        (sessions, results)
    }

    #[test]
    fn only_numeric_entries_are_recorded() {
        let (sessions, results) = setup();
        let mut observed = LastObservedSettings::new();
        observed.record(&results, &sessions, now());
        assert_eq!(observed.len(), 1);
        assert_eq!(observed.get(GAME).unwrap().profit, 250.0);
        assert!(observed.get(BROKEN).is_none());
    }

    #[test]
    fn each_poll_replaces_the_snapshot() {
        let (sessions, mut results) = setup();
        let mut observed = LastObservedSettings::new();
        observed.record(&results, &sessions, now());

        results.insert(GAME.into(), ProfitValue::Failed("ERROR: timeout".into()));
        results.insert("https://www.pokernow.club/games/untracked".into(), ProfitValue::Numeric(1.0));
        observed.record(&results, &sessions, now());
        assert!(observed.is_empty());
    }

    #[test]
    fn flag_flip_is_reported_until_adopted() {
        let (mut sessions, results) = setup();
        let mut observed = LastObservedSettings::new();
        observed.record(&results, &sessions, now());
        assert!(observed.drifted(&sessions).is_empty());

        sessions.toggle_subunits(GAME);
        // Unobserved games never count as drift.
        sessions.toggle_subunits(BROKEN);
        assert_eq!(observed.drifted(&sessions), vec![GAME.to_string()]);

        observed.adopt_flags(&sessions);
        assert!(observed.drifted(&sessions).is_empty());
    }
}
