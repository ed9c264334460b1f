//! # Chat Provider Tokens
//!
//! Tokens handed to the chat provider's client SDK. A provider token is an HS256
//! JWT whose payload names the provider-side user:
//!
//! ```text
//! { "user_id": "64f1c0ffee", "iat": 1718000000 }
//! ```
//!
//! It is signed with the provider API secret and carries no `exp` claim, so
//! expiry is left to the provider's defaults.
//!
//! Signing goes through the [`TokenSigner`] trait so the issuer can be exercised
//! with a stub signer in tests.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::validate_not_empty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a provider token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderClaims {
    /// Provider-side user key (the principal identifier)
    pub user_id: String,
    /// Issued at time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Provider token errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("User ID is required to generate token")]
    MissingUserId,

    #[error("Provider API secret is not configured")]
    MissingSecret,

    #[error("Failed to sign provider token: {0}")]
    Signing(String),

    #[error("Invalid provider token: {0}")]
    Invalid(String),
}

/// Mints provider tokens for a principal.
pub trait TokenSigner: Send + Sync {
    /// Create a token whose subject is `user_id`, signed with `api_secret`.
    fn create_token(&self, api_secret: &str, user_id: &str) -> Result<String, TokenError>;
}

/// HS256 signer producing provider-compatible user tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacTokenSigner;

impl TokenSigner for HmacTokenSigner {
    fn create_token(&self, api_secret: &str, user_id: &str) -> Result<String, TokenError> {
        if api_secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        validate_not_empty(user_id, "User ID").map_err(|_| TokenError::MissingUserId)?;

        let claims = ProviderClaims {
            user_id: user_id.to_string(),
            iat: Some(Utc::now().timestamp()),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(api_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

/// Verify a provider token's signature and return its claims.
pub fn decode_provider_token(token: &str, api_secret: &str) -> Result<ProviderClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let token_data = decode::<ProviderClaims>(
        token,
        &DecodingKey::from_secret(api_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "provider-api-secret-for-tests";

    #[test]
    fn test_provider_token_names_the_user() {
        let token = HmacTokenSigner.create_token(SECRET, "64f1c0ffee").unwrap();
        let claims = decode_provider_token(&token, SECRET).unwrap();

        assert_eq!(claims.user_id, "64f1c0ffee");
        assert!(claims.iat.is_some());
    }

    #[test]
    fn test_provider_token_has_three_segments() {
        let token = HmacTokenSigner.create_token(SECRET, "u1").unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_empty_user_rejected() {
        assert_eq!(HmacTokenSigner.create_token(SECRET, ""), Err(TokenError::MissingUserId));
        assert_eq!(HmacTokenSigner.create_token(SECRET, "   "), Err(TokenError::MissingUserId));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(HmacTokenSigner.create_token("", "u1"), Err(TokenError::MissingSecret));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = HmacTokenSigner.create_token(SECRET, "u1").unwrap();
        let result = decode_provider_token(&token, "some-other-secret");

        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_without_iat_still_decodes() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &ProviderClaims { user_id: "u2".to_string(), iat: None },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let claims = decode_provider_token(&token, SECRET).unwrap();
        assert_eq!(claims.user_id, "u2");
        assert_eq!(claims.iat, None);
    }
}
