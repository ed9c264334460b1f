//! # Client Configuration
//!
//! - `STREAM_API_KEY`: public provider key, must match the backend's key
//! - `API_BASE_URL`: backend base URL (default `http://127.0.0.1:3001`)
//! - `APP_ORIGIN`: origin used to build call links (default `http://localhost:5173`)
//!
//! A missing API key is not a load error: session attempts fail with
//! [`ClientError::MissingApiKey`](crate::ClientError::MissingApiKey) instead.

use lib_utils::get_env_opt;
use shared::mask_key;
use std::fmt;
use tracing::{error, info};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub stream_api_key: Option<String>,
    pub app_origin: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            stream_api_key: None,
            app_origin: DEFAULT_APP_ORIGIN.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from the environment, logging whether the API key was found.
    pub fn from_env() -> Self {
        let stream_api_key = get_env_opt("STREAM_API_KEY");

        match &stream_api_key {
            Some(key) => info!("[CONFIG] STREAM_API_KEY: found ({})", mask_key(key)),
            None => error!("[CONFIG] STREAM_API_KEY: missing"),
        }

        Self {
            api_base_url: get_env_opt("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            stream_api_key,
            app_origin: get_env_opt("APP_ORIGIN").unwrap_or_else(|| DEFAULT_APP_ORIGIN.to_string()),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("stream_api_key", &self.stream_api_key.as_deref().map(mask_key))
            .field("app_origin", &self.app_origin)
            .finish()
    }
}
