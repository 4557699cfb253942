//! Trait abstraction for the election API client to enable mocking in tests

use crate::state::{BallotPayload, Candidate};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the election API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server refused the ballot; `status` is the server-provided text
    /// shown verbatim to the voter
    #[error("{status}")]
    Rejected { status: String },
    /// Transport-level failure (connection refused, bad payload, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Trait for election API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BallotApi: Send + Sync {
    /// Fetch the full candidate list
    async fn get_all_candidates(&self) -> Result<Vec<Candidate>, ApiError>;

    /// Submit a completed ballot for counting
    async fn count_ballot(&self, ballot: BallotPayload) -> Result<(), ApiError>;
}
