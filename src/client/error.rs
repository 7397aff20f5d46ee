//! Client error types

use thiserror::Error;

/// Errors that can occur when talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Any non-2xx answer, whatever its body says
    #[error("{method} {path} failed: {status}")]
    Status {
        method: String,
        path: String,
        status: u16,
    },

    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl ClientError {
    /// Classify a transport error the way the retry-free client reports it
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Unavailable
        } else {
            ClientError::Request(e)
        }
    }

    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Status {
            method: "GET".to_string(),
            path: "/plants/7".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "GET /plants/7 failed: 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(ClientError::Timeout.status(), None);
    }
}
