//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`]. It follows
//! the `thiserror` pattern and renders every variant as a JSON body of the form
//! `{"detail": "<message>"}`.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`InvalidBase64`](AppError::InvalidBase64) → 400 Bad Request
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!    - [`InvalidQuery`](AppError::InvalidQuery) → 422 Unprocessable Entity
//!
//! 2. **Server Errors** (5xx)
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn decode(data: &str) -> Result<String> {
//!     Ok(lib_utils::b64_decode_to_string(data)?)
//! }
//!
//! assert!(matches!(decode("%%%"), Err(AppError::InvalidBase64)));
//! ```

use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input that is not strictly valid base64, or does not decode to UTF-8.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid Base64 data")]
    InvalidBase64,

    /// Missing or malformed query parameter, rejected by the extractor.
    ///
    /// **HTTP Status**: 422 Unprocessable Entity
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// No route matched the request path.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not Found")]
    NotFound,

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBase64 => StatusCode::BAD_REQUEST,
            AppError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message placed in the `detail` field.
    ///
    /// Server errors return a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidBase64 | AppError::NotFound => self.to_string(),
            AppError::InvalidQuery(msg) => msg.clone(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(ErrorResponse {
            detail: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Convert base64 decode failures to `AppError`.
impl From<lib_utils::b64::Error> for AppError {
    fn from(_: lib_utils::b64::Error) -> Self {
        AppError::InvalidBase64
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidBase64.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidQuery("missing field `data`".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(AppError::InvalidBase64.user_message(), "Invalid Base64 data");
        assert_eq!(AppError::NotFound.user_message(), "Not Found");
        assert_eq!(
            AppError::InvalidQuery("missing field `data`".to_string()).user_message(),
            "missing field `data`"
        );
        assert_eq!(
            AppError::Config("BIND_ADDRESS".to_string()).user_message(),
            "An internal error occurred"
        );
    }

    #[test]
    fn test_from_b64_error() {
        let err: AppError = lib_utils::b64::Error::FailToB64Decode.into();
        assert!(matches!(err, AppError::InvalidBase64));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidBase64.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
// endregion: --- Tests
