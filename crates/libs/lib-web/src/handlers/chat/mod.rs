//! # Chat Handlers
//!
//! `GET /api/chat/token` returns a chat provider token for the authenticated caller.
//!
//! ```text
//! 200 { "token": "<jwt>" }
//! 401 { "message": "User not authenticated", "code": "Unauthenticated" }
//! 500 { "message": "Chat provider is not configured", "code": "ConfigurationMissing" }
//! ```

use crate::middleware::AuthUser;
use crate::services::TokenIssuer;
use axum::{extract::State, Json};
use lib_core::Result;
use shared::TokenResponse;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Issue a provider token for the caller identified by the session JWT.
#[tracing::instrument(skip(issuer, user), fields(user_id = %user.user_id))]
pub async fn get_stream_token(
    State(issuer): State<Arc<TokenIssuer>>,
    user: AuthUser,
) -> Result<Json<TokenResponse>> {
    let token = issuer.issue_token(&user.user_id)?;
    Ok(Json(TokenResponse { token }))
}
