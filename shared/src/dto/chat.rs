//! # Chat Data Transfer Objects
//!
//! Defines request and response structures for the chat token endpoint and the
//! user profile fields sent to the chat provider on connect.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /api/chat/token` -> [`TokenResponse`] | [`ErrorResponse`]
//!
//! ## Example Usage
//!
//! ```rust
//! use shared::dto::chat::{ErrorResponse, TokenResponse};
//!
//! let ok: TokenResponse = serde_json::from_str(r#"{"token":"abc.def.ghi"}"#).unwrap();
//! assert_eq!(ok.token, "abc.def.ghi");
//!
//! let err: ErrorResponse = serde_json::from_str(r#"{"message":"User not authenticated"}"#).unwrap();
//! assert_eq!(err.message, "User not authenticated");
//! assert!(err.code.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Chat provider token returned by `GET /api/chat/token`.
///
/// The token is opaque to the client; it is handed to the provider's connect call as-is.
///
/// # JSON Example
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VyX2lkIjoidTEifQ.sig" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Standard error response for all API endpoints.
///
/// # HTTP Status Codes
///
/// - `401 Unauthorized` - No caller identity
/// - `500 Internal Server Error` - Provider not configured or token signing failed
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Chat provider is not configured",
///   "code": "ConfigurationMissing"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
}

/// Chat user profile sent to the provider when a session connects.
///
/// # Fields
///
/// * `id` - Principal identifier (the provider-side user key)
/// * `name` - Display name
/// * `image` - Optional avatar URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ChatUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
