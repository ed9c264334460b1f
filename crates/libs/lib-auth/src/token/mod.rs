//! # Session Token Management
//!
//! App session JWT generation and validation. The application's login flow issues
//! these; the web layer's auth middleware verifies them and exposes the caller's
//! principal to handlers.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT Claims structure containing the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Encode a session JWT for a principal.
pub fn encode_jwt(
    user_id: &str,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode JWT: {}", e))
}

/// Decode and validate a session JWT.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("Failed to decode JWT: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_jwt_encoding_decoding() {
        let token = encode_jwt("64f1c0ffee", SECRET, 24)
            .expect("JWT encoding should succeed");
        let claims = decode_jwt(&token, SECRET)
            .expect("JWT decoding should succeed");

        assert_eq!(claims.sub, "64f1c0ffee");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_jwt_wrong_secret_rejected() {
        let token = encode_jwt("u1", SECRET, 24).unwrap();
        let result = decode_jwt(&token, "another-secret-key-that-is-32-chars-long!!");

        assert!(result.is_err());
    }

    #[test]
    fn test_jwt_expired_rejected() {
        // Default validation leeway is 60 seconds, so go well past it
        let token = encode_jwt("u1", SECRET, -2).unwrap();
        let result = decode_jwt(&token, SECRET);

        assert!(result.is_err());
    }
}
