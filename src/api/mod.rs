//! Election API client module

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::{ApiError, BallotApi};

#[cfg(test)]
pub use traits::MockBallotApi;
