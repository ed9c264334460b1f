//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//!
//! Two kinds of settings live here with different failure policies:
//!
//! - **App session secret** (`JWT_SECRET`): required.
//!   [`Config::from_env`] plus [`Config::validate`] fail fast if misconfigured.
//! - **Chat provider credentials** (`STREAM_API_KEY`, `STREAM_API_SECRET`): both
//!   required for token issuance, but their absence is a degraded mode. The server
//!   still starts and every token request answers with a configuration error.
//!
//! ## Usage
//!
//! The configuration is constructed once at the composition root and passed
//! through axum state. There is no global instance.
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::from_env().expect("config");
//! config.validate().expect("valid config");
//! if config.stream.is_none() {
//!     // token endpoint will answer 500 ConfigurationMissing
//! }
//! ```

use lib_utils::{get_env, get_env_opt, validate_min_length};
use shared::mask_key;
use std::fmt;
use tracing::{error, info};

/// Environment variable holding the chat provider API key.
pub const STREAM_API_KEY_ENV: &str = "STREAM_API_KEY";
/// Environment variable holding the chat provider API secret.
pub const STREAM_API_SECRET_ENV: &str = "STREAM_API_SECRET";

/// Chat provider credentials used to sign provider tokens.
///
/// `Debug` output never contains the secret and only a prefix of the key.
#[derive(Clone, PartialEq, Eq)]
pub struct StreamCredentials {
    /// Public API key (also configured on the client)
    pub api_key: String,
    /// API secret used as the HMAC signing key. Never log this.
    pub api_secret: String,
}

impl StreamCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load provider credentials from the environment.
    ///
    /// Logs which variables were found, without exposing their values.
    /// Returns `None` when either value is missing.
    pub fn from_env() -> Option<Self> {
        let api_key = get_env_opt(STREAM_API_KEY_ENV);
        let api_secret = get_env_opt(STREAM_API_SECRET_ENV);

        info!("[CONFIG] Stream API configuration check:");
        match &api_key {
            Some(key) => info!("[CONFIG]   {}: set ({})", STREAM_API_KEY_ENV, mask_key(key)),
            None => error!("[CONFIG]   {}: missing", STREAM_API_KEY_ENV),
        }
        match &api_secret {
            Some(_) => info!("[CONFIG]   {}: set", STREAM_API_SECRET_ENV),
            None => error!("[CONFIG]   {}: missing", STREAM_API_SECRET_ENV),
        }

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => {
                info!("[CONFIG] Stream API credentials found");
                Some(Self { api_key, api_secret })
            }
            _ => {
                error!(
                    "[CONFIG] Stream API key or secret is missing. Set {} and {} and restart the server. Chat tokens cannot be issued until then.",
                    STREAM_API_KEY_ENV, STREAM_API_SECRET_ENV
                );
                None
            }
        }
    }
}

impl fmt::Debug for StreamCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCredentials")
            .field("api_key", &mask_key(&self.api_key))
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Secret key for app session JWT verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// Chat provider credentials, `None` when not configured (degraded mode)
    pub stream: Option<StreamCredentials>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = get_env("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment")?;

        Ok(Self {
            jwt_secret,
            stream: StreamCredentials::from_env(),
        })
    }

    /// Validate configuration values against security rules.
    ///
    /// Provider credentials are not validated here: their absence is reported
    /// per request instead of preventing startup.
    pub fn validate(&self) -> Result<(), String> {
        validate_min_length(&self.jwt_secret, 32, "JWT_SECRET")?;
        Ok(())
    }

    /// Whether chat tokens can be issued.
    pub fn has_stream_credentials(&self) -> bool {
        self.stream.is_some()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"***REDACTED***")
            .field("stream", &self.stream)
            .finish()
    }
}
