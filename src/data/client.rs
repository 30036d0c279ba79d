use async_trait::async_trait;
use thiserror::Error;

use crate::config::API;
use crate::data::{ResultsRequest, ResultsResponse};
use crate::shared::MaybeSendSync;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Unable to connect to server. Please check your internet connection.")]
    Connect,
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Invalid response from server: {0}")]
    Decode(String),
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status.as_u16());
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return Self::Connect;
        }
        Self::Transport(err.to_string())
    }
}

/// Abstract interface for fetching per-game results.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ResultsClient: MaybeSendSync {
    async fn fetch_results(&self, request: &ResultsRequest) -> Result<ResultsResponse, ClientError>;
}

pub struct HttpResultsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpResultsClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", api_base.trim_end_matches('/'), API.results_path),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ResultsClient for HttpResultsClient {
    async fn fetch_results(&self, request: &ResultsRequest) -> Result<ResultsResponse, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ResultsResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        assert_eq!(
            HttpResultsClient::new("http://localhost:8080/").endpoint(),
            "http://localhost:8080/api/get_results"
        );
        assert_eq!(
            HttpResultsClient::new("https://tracker.example").endpoint(),
            "https://tracker.example/api/get_results"
        );
    }

    #[test]
    fn connect_error_uses_friendly_message() {
        assert_eq!(
            ClientError::Connect.to_string(),
            "Unable to connect to server. Please check your internet connection."
        );
        assert_eq!(
            ClientError::Status(502).to_string(),
            "Request failed with status code 502"
        );
    }
}
