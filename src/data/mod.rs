mod api;
mod client;

pub use {
    api::{GameRef, ResultsRequest, ResultsResponse, TrackingResults},
    client::{ClientError, HttpResultsClient, ResultsClient},
};
