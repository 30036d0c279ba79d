use crate::data::{ClientError, ResultsRequest, ResultsResponse};

/// Why a request was sent, so the result is routed to the right phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPurpose {
    /// One-off request made by "Start Tracking".
    Verify,
    /// Timer-driven poll of a tracking run.
    Poll,
}

/// A request for the results worker
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub purpose: JobPurpose,
    /// Tracking run that issued the request. Results from an older run are dropped.
    pub generation: u64,
    pub request: ResultsRequest,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub purpose: JobPurpose,
    pub generation: u64,
    pub duration_ms: u128,
    pub outcome: Result<ResultsResponse, ClientError>,
}
