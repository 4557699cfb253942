//! HTTP client for the election API
//!
//! Talks to the counting backend over its two JSON endpoints:
//! `GET /get_all_candidates` and `POST /count_ballot`.

use super::traits::{ApiError, BallotApi};
use crate::config::TuiConfig;
use crate::state::{BallotPayload, Candidate};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Default API base address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:5000/api";

/// Client for the election API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client. The base address comes from the
    /// `BALLOT_API_ADDRESS` environment variable, then the config file,
    /// then the compiled-in default.
    pub fn new(config: &TuiConfig) -> Self {
        let base_url = std::env::var("BALLOT_API_ADDRESS")
            .ok()
            .or_else(|| config.api_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl BallotApi for ApiClient {
    async fn get_all_candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        let url = format!("{}/get_all_candidates", self.base_url);
        tracing::debug!(%url, "fetching candidate list");

        let candidates = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Candidate>>()
            .await?;

        tracing::info!(count = candidates.len(), "candidate list fetched");
        Ok(candidates)
    }

    async fn count_ballot(&self, ballot: BallotPayload) -> Result<(), ApiError> {
        let url = format!("{}/count_ballot", self.base_url);
        tracing::debug!(%url, "submitting ballot");

        let response = self.http.post(&url).json(&ballot).send().await?;
        if response.status().is_success() {
            tracing::info!("ballot counted");
            return Ok(());
        }

        let http_status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%http_status, "ballot rejected");
        Err(ApiError::Rejected {
            status: rejection_status(&body, http_status),
        })
    }
}

/// Extract the server's `status` string from a rejection body, falling back
/// to the HTTP status line when the body is absent or unparseable.
fn rejection_status(body: &str, http_status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("status").and_then(|s| s.as_str()).map(str::to_string))
        .unwrap_or_else(|| http_status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejection_status_uses_body_status_field() {
        let status = rejection_status(
            r#"{"status": "duplicate ballot"}"#,
            StatusCode::CONFLICT,
        );
        assert_eq!(status, "duplicate ballot");
    }

    #[test]
    fn test_rejection_status_falls_back_on_missing_field() {
        let status = rejection_status(r#"{"detail": "nope"}"#, StatusCode::BAD_REQUEST);
        assert_eq!(status, "400 Bad Request");
    }

    #[test]
    fn test_rejection_status_falls_back_on_invalid_json() {
        let status = rejection_status("<html>oops</html>", StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status, "500 Internal Server Error");
    }

    #[test]
    fn test_rejection_status_falls_back_on_empty_body() {
        let status = rejection_status("", StatusCode::BAD_GATEWAY);
        assert_eq!(status, "502 Bad Gateway");
    }

    #[test]
    fn test_non_string_status_field_falls_back() {
        let status = rejection_status(r#"{"status": 42}"#, StatusCode::BAD_REQUEST);
        assert_eq!(status, "400 Bad Request");
    }
}
