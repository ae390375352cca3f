//! Webex API error types.

use thiserror::Error;

/// Result type for Webex API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Normalized failures of a single Webex API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP method is not one of GET, POST, PUT or DELETE.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Timeout or connection failure before a response was received.
    #[error("API request failed: {0}")]
    Network(String),

    /// The platform answered with a 4xx or 5xx status.
    #[error("API request failed: {message}")]
    Http { status: u16, message: String },

    /// The request path could not be turned into a URL; nothing was sent.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    /// A successful response carried a body that is not JSON.
    #[error("Request failed: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of the failed call, if the platform answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure came from the network rather than the platform.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            Self::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else if e.is_timeout() {
            Self::Network(format!("Request timed out: {}", e))
        } else if e.is_connect() {
            Self::Network(format!("Connection failed: {}", e))
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
