//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! web layer. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`Unauthenticated`](AppError::Unauthenticated) → 401 Unauthorized
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!
//! 2. **Server Errors** (5xx)
//!    - [`ConfigurationMissing`](AppError::ConfigurationMissing) → 500, distinguishable by its `code`
//!    - [`TokenGeneration`](AppError::TokenGeneration) → 500, generic message (provider rejected signing)
//!    - [`Internal`](AppError::Internal) → 500
//!
//! ## Wire Format
//!
//! Every error renders as [`shared::ErrorResponse`]:
//!
//! ```text
//! { "message": "Chat provider is not configured", "code": "ConfigurationMissing" }
//! ```
//!
//! Server-side detail (the variant's inner string) is logged, never sent, except for
//! client errors whose message is meant for the caller.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use shared::ErrorResponse;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned to callers when the provider credentials are absent.
pub const CONFIGURATION_MISSING_MESSAGE: &str = "Chat provider is not configured";
/// Message returned to callers when the provider rejects token signing.
pub const TOKEN_GENERATION_MESSAGE: &str = "Failed to generate chat token";

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// No caller identity in the request.
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Chat provider credentials absent at startup.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// The provider token signer rejected the request.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    /// Invalid user input validation error.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

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
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationMissing(_)
            | AppError::TokenGeneration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For server errors, returns a fixed message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthenticated(msg) => msg.clone(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::ConfigurationMissing(_) => CONFIGURATION_MISSING_MESSAGE.to_string(),
            AppError::TokenGeneration(_) => TOKEN_GENERATION_MESSAGE.to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Stable error code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "Unauthenticated",
            AppError::ConfigurationMissing(_) => "ConfigurationMissing",
            AppError::TokenGeneration(_) => "TokenGeneration",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full detail goes to server logs only
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => {
                tracing::debug!("Client error: {}", self);
            }
            _ => {
                tracing::error!("Server error: {}", self);
            }
        }

        let body = Json(ErrorResponse {
            message: self.user_message(),
            code: Some(self.code().to_string()),
        });

        (status, body).into_response()
    }
}
