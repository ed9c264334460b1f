//! # Chat Token Endpoint
//!
//! Fetches a provider token from `GET /api/chat/token`.

use shared::{ErrorResponse, TokenResponse};

use super::client::ApiClient;
use crate::core::ClientError;

/// Extra attempts after the first failed token fetch.
pub const TOKEN_FETCH_RETRIES: usize = 1;

/// Fetch a provider token for the caller, retrying once on failure.
///
/// Returns the server's `message` on HTTP errors.
#[tracing::instrument(skip(client, session_jwt))]
pub async fn get_stream_token(client: &ApiClient, session_jwt: &str) -> Result<String, ClientError> {
    let mut last_error = String::new();

    for attempt in 0..=TOKEN_FETCH_RETRIES {
        match fetch_stream_token(client, session_jwt).await {
            Ok(response) if response.token.is_empty() => {
                tracing::warn!(attempt, "Token endpoint returned an empty token");
                last_error = "Empty token in response".to_string();
            }
            Ok(response) => return Ok(response.token),
            Err(e) => {
                tracing::warn!(attempt, error = %e, "Chat token fetch failed");
                last_error = e;
            }
        }
    }

    tracing::error!(error = %last_error, "Giving up on chat token");
    Err(ClientError::Api(last_error))
}

async fn fetch_stream_token(client: &ApiClient, session_jwt: &str) -> Result<TokenResponse, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(format!("{}/api/chat/token", client.base_url()))
        .bearer_auth(session_jwt)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat token network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();

    if status.is_success() {
        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        tracing::info!(duration_ms = start.elapsed().as_millis(), "Chat token received");
        Ok(token)
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("HTTP {}: failed to parse error: {}", status.as_u16(), e))?;

        tracing::warn!(
            status = status.as_u16(),
            error = %error.message,
            code = ?error.code,
            "Chat token request rejected"
        );
        Err(error.message)
    }
}
