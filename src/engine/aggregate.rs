use crate::config::SESSIONS;
use crate::domain::{ProfitValue, ResultsMap, Session, SessionRegistry};

/// One game's profit in whole currency units.
pub fn convert(value: &ProfitValue, session: &Session) -> f64 {
    to_whole_units(value.raw_amount(), session.uses_subunits)
}

pub fn to_whole_units(raw: f64, uses_subunits: bool) -> f64 {
    if uses_subunits {
        raw / SESSIONS.subunits_per_unit
    } else {
        raw
    }
}

/// Sum of every tracked game's profit in whole units.
/// Entries for games no longer in the registry are skipped; failed or malformed entries add nothing.
pub fn aggregate_profit(results: &ResultsMap, sessions: &SessionRegistry) -> f64 {
    results
        .iter()
        .filter_map(|(url, value)| sessions.get(url).map(|session| convert(value, session)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_A: &str = "https://www.pokernow.club/games/a";
    const GAME_B: &str = "https://www.pokernow.club/games/b";
    const GAME_C: &str = "https://www.pokernow.club/games/c";

    fn registry(cents: &[&str]) -> SessionRegistry {
        let mut sessions = SessionRegistry::new();
        for url in [GAME_A, GAME_B, GAME_C] {
            sessions.add(url).unwrap();
        }
        for url in cents {
            sessions.toggle_subunits(url);
        }
        sessions
    }

    #[test]
    fn subunit_flag_divides_by_hundred() {
        let mut results = ResultsMap::new();
        results.insert(GAME_A.into(), ProfitValue::Numeric(250.0));

        assert_eq!(aggregate_profit(&results, &registry(&[GAME_A])), 2.5);
        assert_eq!(aggregate_profit(&results, &registry(&[])), 250.0);
    }

    #[test]
    fn failed_and_untracked_entries_contribute_nothing() {
        let mut results = ResultsMap::new();
        results.insert(GAME_A.into(), ProfitValue::Numeric(10.0));
        results.insert(GAME_B.into(), ProfitValue::from_text("ERROR: timeout"));
        results.insert(GAME_C.into(), ProfitValue::Malformed("??".into()));
        results.insert(
            "https://www.pokernow.club/games/gone".into(),
            ProfitValue::Numeric(1_000.0),
        );

        assert_eq!(aggregate_profit(&results, &registry(&[])), 10.0);
    }

    #[test]
    fn result_does_not_depend_on_insertion_order() {
        let entries = [
            (GAME_A, ProfitValue::Numeric(0.1)),
            (GAME_B, ProfitValue::Numeric(1234.0)),
            (GAME_C, ProfitValue::Numeric(-0.7)),
        ];
        let forward: ResultsMap = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let backward: ResultsMap = entries
            .iter()
            .rev()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        let sessions = registry(&[GAME_B]);
        let total = aggregate_profit(&forward, &sessions);
        assert_eq!(total, aggregate_profit(&backward, &sessions));
        assert_eq!(total, aggregate_profit(&forward, &sessions));
    }
}
