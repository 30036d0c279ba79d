use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::SESSIONS;

/// Game URL -> decoded profit value, as returned by one poll.
/// Keyed by URL so every fold over it runs in the same order regardless of arrival order.
pub type ResultsMap = BTreeMap<String, ProfitValue>;

/// A single game's profit as reported by the backend, decoded once at the wire boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfitValue {
    /// Raw amount, still in the game's own unit (whole or cents).
    Numeric(f64),
    /// Backend-reported failure, e.g. `ERROR: Player not found in game`.
    Failed(String),
    /// Anything else the backend sent that is not a number.
    Malformed(String),
}

impl ProfitValue {
    pub fn from_text(raw: &str) -> Self {
        if raw.starts_with(SESSIONS.error_prefix) {
            return Self::Failed(raw.to_owned());
        }
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Numeric(v),
            _ => Self::Malformed(raw.to_owned()),
        }
    }

    pub fn from_number(value: f64) -> Self {
        if value.is_finite() {
            Self::Numeric(value)
        } else {
            Self::Malformed(value.to_string())
        }
    }

    /// Raw amount with failures and garbage counted as zero.
    pub fn raw_amount(&self) -> f64 {
        match self {
            Self::Numeric(v) => *v,
            Self::Failed(_) | Self::Malformed(_) => 0.0,
        }
    }

    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ProfitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{}", v),
            Self::Failed(reason) => write!(f, "{}", reason),
            Self::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireProfit {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for ProfitValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireProfit::deserialize(deserializer)? {
            WireProfit::Number(v) => Self::from_number(v),
            WireProfit::Text(raw) => Self::from_text(&raw),
            WireProfit::Other(value) => Self::Malformed(value.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_are_classified() {
        assert_eq!(
            ProfitValue::from_text("ERROR: timeout"),
            ProfitValue::Failed("ERROR: timeout".into())
        );
        assert_eq!(ProfitValue::from_text(" -12.5 "), ProfitValue::Numeric(-12.5));
        assert_eq!(
            ProfitValue::from_text("n/a"),
            ProfitValue::Malformed("n/a".into())
        );
        assert_eq!(ProfitValue::from_text("NaN"), ProfitValue::Malformed("NaN".into()));
    }

    #[test]
    fn failures_count_as_zero() {
        assert_eq!(ProfitValue::from_text("ERROR: timeout").raw_amount(), 0.0);
        assert_eq!(ProfitValue::Malformed("??".into()).raw_amount(), 0.0);
        assert_eq!(ProfitValue::Numeric(250.0).raw_amount(), 250.0);
    }

    #[test]
    fn wire_values_decode_from_mixed_json() {
        let map: ResultsMap = serde_json::from_str(
            r#"{
                "https://www.pokernow.club/games/a": 120,
                "https://www.pokernow.club/games/b": "ERROR: Player not found in game",
                "https://www.pokernow.club/games/c": "37.5",
                "https://www.pokernow.club/games/d": null
            }"#,
        )
        .unwrap();

        assert_eq!(map["https://www.pokernow.club/games/a"], ProfitValue::Numeric(120.0));
        assert!(map["https://www.pokernow.club/games/b"].is_failed());
        assert_eq!(map["https://www.pokernow.club/games/c"], ProfitValue::Numeric(37.5));
        assert_eq!(
            map["https://www.pokernow.club/games/d"],
            ProfitValue::Malformed("null".into())
        );
    }
}
