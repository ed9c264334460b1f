//! # Service Traits
//!
//! Traits for dependency injection at the two external seams: the chat
//! provider SDK and the backend token endpoint.

use async_trait::async_trait;
use shared::ChatUser;
use thiserror::Error;

use crate::core::error::ClientError;

/// Channel type used for every two-party conversation.
pub const MESSAGING: &str = "messaging";

/// Errors reported by a chat provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No user is connected")]
    NotConnected,

    #[error("Already connected as {0}")]
    AlreadyConnected(String),

    #[error("API key does not match this application")]
    ApiKeyMismatch,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("User {0} is not a member of this channel")]
    NotMember(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Provider request failed: {0}")]
    Request(String),
}

/// What to open: type, id and the members a new channel is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub kind: String,
    pub id: String,
    pub members: Vec<String>,
}

impl ChannelSpec {
    pub fn messaging(id: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            kind: MESSAGING.to_string(),
            id: id.into(),
            members,
        }
    }
}

/// A channel the provider is watching for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHandle {
    pub kind: String,
    pub id: String,
    pub members: Vec<String>,
}

impl ChannelHandle {
    /// Provider-wide channel id, `<type>:<id>`.
    pub fn cid(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// Client-side chat provider SDK.
///
/// One session per provider instance. Implementations must accept concurrent
/// calls, although the session manager serializes its own.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Principal of the live session, if any.
    fn current_user_id(&self) -> Option<String>;

    /// Open a session for `user`, authenticated by a provider `token`.
    async fn connect_user(&self, api_key: &str, user: &ChatUser, token: &str) -> Result<(), ProviderError>;

    /// Close the live session. A no-op when nothing is connected.
    async fn disconnect_user(&self) -> Result<(), ProviderError>;

    /// Create the channel if absent and start watching it.
    async fn watch_channel(&self, spec: &ChannelSpec) -> Result<ChannelHandle, ProviderError>;

    /// Post a text message as the connected user.
    async fn send_message(&self, channel: &ChannelHandle, text: &str) -> Result<(), ProviderError>;
}

/// Source of provider tokens, normally the backend's `/api/chat/token`.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch a provider token for the caller identified by `session_jwt`.
    async fn get_stream_token(&self, session_jwt: &str) -> Result<String, ClientError>;
}
