/// Results backend endpoint layout.
pub struct ApiConfig {
    /// Used when neither `--api-url` nor `TRACKER_API_URL` is given (native builds).
    pub default_base_url: &'static str,
    pub results_path: &'static str,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:8080",
    results_path: "/api/get_results",
};
