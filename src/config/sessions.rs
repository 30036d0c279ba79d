//! Conventions shared with the backend for game URLs and per-game values.

pub struct SessionRules {
    /// Substring every tracked game URL must contain.
    pub url_marker: &'static str,
    /// Prefix the backend puts on per-game failure strings, e.g. `ERROR: Player not found in game`.
    pub error_prefix: &'static str,
    /// Divisor applied to games flagged as reporting in cents.
    pub subunits_per_unit: f64,
}

pub const SESSIONS: SessionRules = SessionRules {
    url_marker: "pokernow.club/games/",
    error_prefix: "ERROR",
    subunits_per_unit: 100.0,
};
