//! API Errors

use thiserror::Error;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the food catalog API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, transport or body decoding failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{method} {path} returned status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
}

impl ApiError {
    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
