//! # Client Error Types
//!
//! Every failed session attempt ends in one [`ClientError`]. Errors are terminal
//! for the attempt. [`ClientError::notice`] turns them into the user-facing
//! message a UI would show, except [`ClientError::Cancelled`], which is silent.

use thiserror::Error;

use crate::core::service::ProviderError;
use crate::notify::Notice;

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

pub const TOKEN_FAILED_NOTICE: &str = "Failed to get chat token";
pub const API_KEY_MISSING_NOTICE: &str = "Stream API key not configured. Check frontend environment.";
pub const CONNECT_FAILED_NOTICE: &str = "Could not connect to chat. Please try again.";
pub const PRINCIPAL_MISSING_NOTICE: &str = "Could not open chat: a participant is missing.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Self or target principal is empty. The field names which one.
    #[error("Missing principal: {0}")]
    MissingPrincipal(&'static str),

    #[error("Chat token is missing")]
    MissingToken,

    #[error("Stream API key is not configured")]
    MissingApiKey,

    /// Backend call failed (network, HTTP status, body parsing).
    #[error("API error: {0}")]
    Api(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The attempt was torn down or superseded before it completed.
    #[error("Session initialization cancelled")]
    Cancelled,
}

impl ClientError {
    /// Notice to show the user, `None` for silent errors.
    pub fn notice(&self) -> Option<Notice> {
        let text = match self {
            ClientError::Cancelled => return None,
            ClientError::MissingPrincipal(_) => PRINCIPAL_MISSING_NOTICE,
            ClientError::MissingToken | ClientError::Api(_) => TOKEN_FAILED_NOTICE,
            ClientError::MissingApiKey => API_KEY_MISSING_NOTICE,
            ClientError::Provider(_) => CONNECT_FAILED_NOTICE,
        };
        Some(Notice::Error(text.to_string()))
    }
}
