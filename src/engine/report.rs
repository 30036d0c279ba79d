use crate::data::TrackingResults;
use crate::domain::{ProfitValue, SessionRegistry};
use crate::engine::aggregate::{aggregate_profit, to_whole_units};
use crate::ui::UI_TEXT;
use crate::utils::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    Positive,
    Negative,
    Error,
    Malformed,
}

impl RowTone {
    pub fn for_amount(amount: f64) -> Self {
        if amount >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// One line of the results table, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub url: String,
    pub display: String,
    pub amount: Option<f64>,
    pub tone: RowTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalRow {
    pub amount: f64,
    pub display: String,
    pub tone: RowTone,
}

/// Table rows in registry order, followed by any games the backend reported that are not tracked.
pub fn build_rows(results: &TrackingResults, sessions: &SessionRegistry) -> Vec<ResultRow> {
    let known = sessions
        .iter()
        .filter_map(|s| results.results.get_key_value(&s.url));
    let unknown = results
        .results
        .iter()
        .filter(|(url, _)| !sessions.contains(url));

    known
        .chain(unknown)
        .map(|(url, value)| {
            let uses_subunits = sessions.get(url).is_some_and(|s| s.uses_subunits);
            build_row(url, value, uses_subunits)
        })
        .collect()
}

fn build_row(url: &str, value: &ProfitValue, uses_subunits: bool) -> ResultRow {
    let (display, amount, tone) = match value {
        ProfitValue::Numeric(raw) => {
            let amount = to_whole_units(*raw, uses_subunits);
            (format_amount(amount), Some(amount), RowTone::for_amount(amount))
        }
        ProfitValue::Failed(reason) => (reason.clone(), None, RowTone::Error),
        ProfitValue::Malformed(raw) => (raw.clone(), None, RowTone::Malformed),
    };
    ResultRow {
        url: url.to_owned(),
        display,
        amount,
        tone,
    }
}

pub fn build_total(results: &TrackingResults, sessions: &SessionRegistry) -> TotalRow {
    let amount = aggregate_profit(&results.results, sessions);
    let mut display = format_amount(amount);
    if results.has_errors {
        display.push_str(&UI_TEXT.table_errors_note);
    }
    TotalRow {
        amount,
        display,
        tone: RowTone::for_amount(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultsMap;

    const GAME_A: &str = "https://www.pokernow.club/games/zzz";
    const GAME_B: &str = "https://www.pokernow.club/games/aaa";
    const STRAY: &str = "https://www.pokernow.club/games/mmm";

    fn fixture() -> (TrackingResults, SessionRegistry) {
        let mut sessions = SessionRegistry::new();
        sessions.add(GAME_A).unwrap();
        sessions.add(GAME_B).unwrap();
        sessions.toggle_subunits(GAME_A);

        let mut results = ResultsMap::new();
        results.insert(GAME_A.into(), ProfitValue::Numeric(-1250.0));
        results.insert(GAME_B.into(), ProfitValue::from_text("ERROR: timeout"));
        results.insert(STRAY.into(), ProfitValue::Numeric(7.0));
        (
            TrackingResults {
                results,
                has_errors: true,
                total_profit: 0.0,
            },
            sessions,
        )
    }

    #[test]
    fn rows_follow_registry_order_then_strays() {
        let (results, sessions) = fixture();
        let rows = build_rows(&results, &sessions);
        let urls: Vec<_> = rows.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec![GAME_A, GAME_B, STRAY]);

        assert_eq!(rows[0].display, "-$12.50");
        assert_eq!(rows[0].tone, RowTone::Negative);
        assert_eq!(rows[1].display, "ERROR: timeout");
        assert_eq!(rows[1].tone, RowTone::Error);
        assert_eq!(rows[2].display, "+$7.00");
    }

    #[test]
    fn total_uses_tracked_games_and_flags_errors() {
        let (results, sessions) = fixture();
        let total = build_total(&results, &sessions);
        assert_eq!(total.amount, -12.5);
        assert_eq!(total.display, "-$12.50 (Some games had errors)");
        assert_eq!(total.tone, RowTone::Negative);
    }
}
