use serde::{Deserialize, Serialize};

use crate::domain::{AliasSet, ResultsMap, SessionRegistry};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRef {
    pub url: String,
    pub is_in_cents: bool,
}

/// Body of `POST /api/get_results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsRequest {
    pub player_name: String,
    pub games: Vec<GameRef>,
    pub aliases: Vec<String>,
}

impl ResultsRequest {
    /// Snapshot of the registries at dispatch time.
    pub fn new(player_name: &str, sessions: &SessionRegistry, aliases: &AliasSet) -> Self {
        Self {
            player_name: player_name.trim().to_owned(),
            games: sessions
                .iter()
                .map(|s| GameRef {
                    url: s.url.clone(),
                    is_in_cents: s.uses_subunits,
                })
                .collect(),
            aliases: aliases.to_vec(),
        }
    }
}

/// Per-game results plus the backend's own summary of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrackingResults {
    pub results: ResultsMap,
    #[serde(default)]
    pub has_errors: bool,
    /// Backend's raw sum. The UI recomputes its own total with the cents flags applied.
    #[serde(default)]
    pub total_profit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Option<TrackingResults>,
    #[serde(default)]
    pub error: Option<String>,
}
