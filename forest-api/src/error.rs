//! Error taxonomy for API calls.

use thiserror::Error;

/// Everything that can go wrong talking to the upstream services.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, aborted fetch).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
