// src/api/error.rs
use reqwest::StatusCode;

/// Everything that can go wrong between sending a request and holding a typed result.
/// None of this is shown to the user; pages replace it with their own message.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded with status {0}")]
    Status(StatusCode),
    #[error("response body did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request cancelled")]
    Cancelled,
    /// The task carrying the request went away without reporting back.
    #[error("request task ended without a result")]
    Abandoned,
}
