//! Error normalization for API calls
//!
//! Every failure that leaves the HTTP pipeline is exactly one [`ApiError`].
//! There is no other error type on the caller-facing surface, so errors are
//! never double-wrapped.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Message used when no connection to the server could be established
pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to server. Please check your internet connection.";

/// Message used when a server error response carries no message of its own
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Message used for local failures that carry no message of their own
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Normalized API error
///
/// `status` is the HTTP status of the failed response, or `0` when no
/// response was received at all (network-level failure).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Field-level validation messages, keyed by field name
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

/// Coarse error taxonomy derived from the status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No connection was established (status 0)
    NetworkUnreachable,
    /// 401 from the server
    AuthExpired,
    /// Any other 4xx
    Client,
    /// 5xx and everything unclassified
    Server,
}

/// Error body shape the backend uses for failed responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Build an error from a response status and its parsed body
    pub fn from_response(status: u16, body: ErrorBody) -> Self {
        Self {
            status,
            message: body
                .message
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            field_errors: body.errors,
        }
    }

    /// The server could not be reached at all
    pub fn network_unreachable() -> Self {
        Self {
            status: 0,
            message: CANNOT_CONNECT_MESSAGE.to_string(),
            field_errors: None,
        }
    }

    /// A local failure that is not a transport error (bad response body,
    /// storage failure, ...)
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: 500,
            message: if message.is_empty() {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            field_errors: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            0 => ErrorKind::NetworkUnreachable,
            401 => ErrorKind::AuthExpired,
            400..=499 => ErrorKind::Client,
            _ => ErrorKind::Server,
        }
    }

    /// Whether this failure should trigger the refresh-and-retry path
    pub fn is_auth_expired(&self) -> bool {
        self.status == 401
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Decode and builder errors happened locally after (or before) a
        // connection; everything else means the server was never reached.
        if err.is_decode() || err.is_builder() {
            Self::unexpected(err.to_string())
        } else {
            Self::network_unreachable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_uses_body_message_and_field_errors() {
        let body: ErrorBody = serde_json::from_value(serde_json::json!({
            "message": "Validation failed",
            "errors": { "email": ["must be a valid email"] }
        }))
        .unwrap();

        let err = ApiError::from_response(400, body);
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Validation failed");
        assert_eq!(
            err.field_errors.unwrap()["email"],
            vec!["must be a valid email".to_string()]
        );
    }

    #[test]
    fn from_response_defaults_message_when_body_is_empty() {
        let err = ApiError::from_response(503, ErrorBody::default());
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.field_errors, None);
    }

    #[test]
    fn network_failure_is_status_zero() {
        let err = ApiError::network_unreachable();
        assert_eq!(err.status, 0);
        assert_eq!(err.kind(), ErrorKind::NetworkUnreachable);
        assert_eq!(err.message, CANNOT_CONNECT_MESSAGE);
    }

    #[test]
    fn unexpected_defaults_message_when_empty() {
        assert_eq!(ApiError::unexpected("").message, UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(ApiError::unexpected("boom").message, "boom");
    }

    #[test]
    fn kind_maps_status_ranges() {
        assert_eq!(
            ApiError::from_response(401, ErrorBody::default()).kind(),
            ErrorKind::AuthExpired
        );
        assert_eq!(
            ApiError::from_response(404, ErrorBody::default()).kind(),
            ErrorKind::Client
        );
        assert_eq!(
            ApiError::from_response(500, ErrorBody::default()).kind(),
            ErrorKind::Server
        );
        assert_eq!(ApiError::network_unreachable().kind(), ErrorKind::NetworkUnreachable);
    }

    #[test]
    fn display_is_the_message() {
        let err = ApiError::from_response(500, ErrorBody::default());
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }
}
