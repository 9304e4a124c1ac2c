//! Transport errors.

/// Failure of a call to the users endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent, or its response body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
}
