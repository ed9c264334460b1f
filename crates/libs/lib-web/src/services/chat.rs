//! # Chat Token Service
//!
//! [`TokenIssuer`] mints chat provider tokens for authenticated principals.
//!
//! The issuer is built once at startup from [`Config`] and shared through axum
//! state. When provider credentials are absent it still exists, and every call
//! fails with [`AppError::ConfigurationMissing`] without touching the signer.

use lib_auth::{HmacTokenSigner, TokenSigner};
use lib_core::{AppError, Config, Result, StreamCredentials};
use std::fmt::{self, Display};
use std::sync::Arc;
use tracing::{error, info};

/// Issues provider tokens scoped to a single principal.
#[derive(Clone)]
pub struct TokenIssuer {
    credentials: Option<StreamCredentials>,
    signer: Arc<dyn TokenSigner>,
}

impl TokenIssuer {
    pub fn new(credentials: Option<StreamCredentials>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { credentials, signer }
    }

    /// Issuer using the HS256 signer and the credentials loaded into `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.stream.clone(), Arc::new(HmacTokenSigner))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Issue a token whose subject is `principal`.
    ///
    /// The principal is coerced to a string before signing, so numeric or
    /// object-id style identifiers are accepted as-is.
    ///
    /// # Errors
    ///
    /// - [`AppError::ConfigurationMissing`] when provider credentials are absent
    /// - [`AppError::InvalidInput`] when the principal is empty
    /// - [`AppError::TokenGeneration`] when the signer fails or returns nothing
    pub fn issue_token(&self, principal: impl Display) -> Result<String> {
        let Some(credentials) = &self.credentials else {
            error!("[CHAT TOKEN] Stream API key or secret is missing, cannot issue token");
            return Err(AppError::ConfigurationMissing(
                "STREAM_API_KEY or STREAM_API_SECRET not set".to_string(),
            ));
        };

        let user_id = principal.to_string();
        if user_id.trim().is_empty() {
            error!("[CHAT TOKEN] Refusing to issue token for an empty principal");
            return Err(AppError::InvalidInput("User ID is required".to_string()));
        }

        info!("[CHAT TOKEN] Generating token for user: {}", user_id);

        let token = self
            .signer
            .create_token(&credentials.api_secret, &user_id)
            .map_err(|e| {
                error!("[CHAT TOKEN] Token creation failed for {}: {}", user_id, e);
                AppError::TokenGeneration(e.to_string())
            })?;

        if token.is_empty() {
            error!("[CHAT TOKEN] Signer returned an empty token for {}", user_id);
            return Err(AppError::TokenGeneration("empty token".to_string()));
        }

        info!("[CHAT TOKEN] Token generated successfully for user: {}", user_id);
        Ok(token)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_auth::{decode_provider_token, TokenError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SECRET: &str = "provider-secret-for-issuer-tests";

    /// Signer that counts calls and answers with a fixed result.
    struct CountingSigner {
        calls: AtomicUsize,
        result: std::result::Result<String, TokenError>,
    }

    impl CountingSigner {
        fn returning(result: std::result::Result<String, TokenError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result,
            })
        }
    }

    impl TokenSigner for CountingSigner {
        fn create_token(&self, _api_secret: &str, _user_id: &str) -> std::result::Result<String, TokenError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(token) => Ok(token.clone()),
                Err(_) => Err(TokenError::Signing("InvalidKeyFormat".to_string())),
            }
        }
    }

    fn credentials() -> Option<StreamCredentials> {
        Some(StreamCredentials::new("publickey123456", SECRET))
    }

    #[test]
    fn test_missing_credentials_never_calls_signer() {
        let signer = CountingSigner::returning(Ok("tok".to_string()));
        let issuer = TokenIssuer::new(None, signer.clone());

        let result = issuer.issue_token("u1");

        assert!(matches!(result, Err(AppError::ConfigurationMissing(_))));
        assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_two_tokens_for_same_principal_both_verify() {
        let issuer = TokenIssuer::new(credentials(), Arc::new(HmacTokenSigner));

        let first = issuer.issue_token("64f1c0ffee").unwrap();
        let second = issuer.issue_token("64f1c0ffee").unwrap();

        for token in [first, second] {
            let claims = decode_provider_token(&token, SECRET).unwrap();
            assert_eq!(claims.user_id, "64f1c0ffee");
        }
    }

    #[test]
    fn test_numeric_principal_is_coerced_to_string() {
        let issuer = TokenIssuer::new(credentials(), Arc::new(HmacTokenSigner));

        let token = issuer.issue_token(42_u64).unwrap();

        assert_eq!(decode_provider_token(&token, SECRET).unwrap().user_id, "42");
    }

    #[test]
    fn test_empty_principal_rejected_before_signing() {
        let signer = CountingSigner::returning(Ok("tok".to_string()));
        let issuer = TokenIssuer::new(credentials(), signer.clone());

        assert!(matches!(issuer.issue_token(""), Err(AppError::InvalidInput(_))));
        assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_signer_failure_maps_to_token_generation() {
        let signer = CountingSigner::returning(Err(TokenError::Signing(String::new())));
        let issuer = TokenIssuer::new(credentials(), signer.clone());

        let result = issuer.issue_token("u1");

        assert!(matches!(result, Err(AppError::TokenGeneration(_))));
        assert_eq!(signer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_token_maps_to_token_generation() {
        let issuer = TokenIssuer::new(credentials(), CountingSigner::returning(Ok(String::new())));

        assert!(matches!(issuer.issue_token("u1"), Err(AppError::TokenGeneration(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let issuer = TokenIssuer::new(credentials(), Arc::new(HmacTokenSigner));

        assert!(!format!("{:?}", issuer).contains(SECRET));
    }
}
