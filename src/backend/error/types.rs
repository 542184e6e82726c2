/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Malformed JSON bodies
 * - Unknown routes or parameters
 *
 * ## Store Errors
 *
 * The post store could not be read or written. The post being created is
 * not persisted and nothing is broadcast for it.
 *
 * ## Validation Errors
 *
 * Carried as `SharedError::ValidationError` so the client and the server
 * report the same field names.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use threadify::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid JSON body");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::store_unavailable("connection refused");
/// assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., malformed request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The post store could not be reached or written
    #[error("Post store unavailable: {message}")]
    StoreUnavailable {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Create a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Whether this error is a client-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::SharedError(err) if err.is_validation())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StoreUnavailable` - 503 Service Unavailable
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `SharedError::SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreUnavailable { message } => format!("Post store unavailable: {}", message),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let validation = BackendError::validation("text", "empty");
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert!(validation.is_validation());

        let store = BackendError::store_unavailable("down");
        assert_eq!(store.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!store.is_validation());

        let serialization: BackendError = SharedError::serialization("bad").into();
        assert_eq!(serialization.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message() {
        let error = BackendError::validation("text", "Post text cannot be empty");
        assert!(error.message().contains("Post text cannot be empty"));

        let error = BackendError::store_unavailable("connection refused");
        assert!(error.message().contains("connection refused"));
    }
}
