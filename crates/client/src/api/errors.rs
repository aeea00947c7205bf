//! API error classification

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the client layer.
///
/// Every variant is recoverable from the caller's point of view; nothing in
/// this crate aborts the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status. The message is extracted from the response
    /// body (JSON `detail`, then `message`, then the raw body, then the
    /// HTTP status reason phrase) so callers can surface it directly.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// An operation that requires a session ran without one.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A token refresh was attempted with no refresh token held.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// Session persistence failed.
    #[error("session storage error: {0}")]
    Storage(String),

    /// The request could not be constructed (body serialization, bad URL).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client construction or environment configuration failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is an HTTP 401 response, the trigger for the one-shot
    /// refresh-and-retry path.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_the_extracted_message_alone() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        };

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn non_status_errors_have_no_http_status() {
        assert!(ApiError::NotAuthenticated.status().is_none());
        assert!(!ApiError::Network("down".to_string()).is_unauthorized());
    }
}
