//! # Authentication Middleware
//!
//! Axum middleware for session JWT validation, plus the [`AuthUser`] extractor
//! handlers use to read the caller's principal.
//!
//! [`require_auth`] extracts and validates the token from the `Authorization`
//! header, then injects the caller's [`Claims`] into the request extensions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lib_web::middleware::{require_auth, AuthUser};
//!
//! async fn whoami(user: AuthUser) -> String {
//!     user.user_id
//! }
//!
//! let app = Router::new()
//!     .route("/api/whoami", get(whoami))
//!     .route_layer(from_fn_with_state(state.clone(), require_auth))
//!     .with_state(state);
//! ```

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_jwt, Claims};
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Authentication middleware that validates session JWTs.
///
/// # Behavior
///
/// - **Valid token**: continues with `Claims` in extensions
/// - **Missing/invalid token**: `401 Unauthorized` with a `{message, code}` body
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthenticated("Missing authorization token".to_string())
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            warn!("[AUTH] Invalid Authorization header format");
            AppError::Unauthenticated("Invalid authorization header".to_string())
        })?;

    let claims = decode_jwt(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] JWT validation failed: {}", e);
        AppError::Unauthenticated("Invalid or expired token".to_string())
    })?;

    debug!("[AUTH] Authenticated principal: {}", claims.sub);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// The authenticated caller, read from the claims [`require_auth`] inserted.
///
/// Rejects with 401 when the route is not behind the middleware or the token
/// carried an empty subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>().ok_or_else(|| {
            warn!("[AUTH] No auth context on request");
            AppError::Unauthenticated("User not authenticated".to_string())
        })?;

        if claims.sub.trim().is_empty() {
            warn!("[AUTH] Auth context has an empty subject");
            return Err(AppError::Unauthenticated("User ID not found".to_string()));
        }

        Ok(Self {
            user_id: claims.sub.clone(),
        })
    }
}
