use thiserror::Error;

/// Errors raised at the remote resource boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not in a recognized shape.
    #[error("Unexpected response format: {0}")]
    Format(String),
}

impl ApiError {
    /// Both transport failures and rejected requests count as network errors
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, ApiError::Format(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Format(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Format(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
