//! Error types for backend requests.

use thiserror::Error;

/// Result alias for API client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the review API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status; the body is shown verbatim
    #[error("{body}")]
    Status { status: u16, body: String },
    /// Request never produced a response (network, CORS)
    #[error("Network error: {0}")]
    Network(String),
    /// Success response whose body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
