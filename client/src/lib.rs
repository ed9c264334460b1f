//! # Chat Client
//!
//! Client side of the chat integration: fetches a provider token from the
//! backend, establishes a provider session, and opens the deterministic
//! two-party channel for a conversation.
//!
//! ## Modules
//!
//! - **[`config`]**: Client configuration from the environment
//! - **[`core`]**: Error type and the [`ChatProvider`](core::ChatProvider) seam
//! - **[`services`]**: Backend API client and the in-memory provider
//! - **[`session`]**: Channel id derivation and the session state machine
//! - **[`notify`]**: User-facing notices and the video-call link message
//!
//! ## Flow
//!
//! ```rust,ignore
//! let config = ClientConfig::from_env();
//! let api = ApiClient::from_config(&config);
//! let manager = ChatSessionManager::new(provider, config.stream_api_key.clone());
//!
//! match manager.open(&api, &session_jwt, &me, &target_id).await {
//!     Ok(channel) => render(channel),
//!     Err(e) => if let Some(notice) = e.notice() { show(notice) },
//! }
//! ```

pub mod config;
pub mod core;
pub mod notify;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use crate::core::{ChannelHandle, ChannelSpec, ChatProvider, ClientError, ProviderError, Result, TokenSource};
pub use notify::{call_url, notify_call_started, Notice};
pub use services::api::ApiClient;
pub use services::provider::InMemoryProvider;
pub use session::{derive_channel_id, ChatSessionManager, InitGuard, SessionState};
