//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::core::{ClientError, TokenSource};

/// HTTP client for communicating with the backend API server.
///
/// Holds a connection pool, so clone or share it instead of building one per call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a 10 second request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TokenSource for ApiClient {
    async fn get_stream_token(&self, session_jwt: &str) -> Result<String, ClientError> {
        crate::services::api::chat::get_stream_token(self, session_jwt).await
    }
}
