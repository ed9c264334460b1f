//! # In-Memory Provider
//!
//! A process-local [`ChatProvider`] for development and tests. It enforces the
//! same rules a hosted provider does at session setup: the API key must match,
//! the token must verify against the provider secret, and the token's `user_id`
//! must be the connecting user. Channels are created on first watch and keep
//! every message posted to them.

use async_trait::async_trait;
use lib_auth::decode_provider_token;
use parking_lot::RwLock;
use shared::ChatUser;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::core::{ChannelHandle, ChannelSpec, ChatProvider, ProviderError};

/// A message stored in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Default)]
struct StoredChannel {
    kind: String,
    members: Vec<String>,
    messages: Vec<ChannelMessage>,
}

#[derive(Debug, Default)]
struct ProviderState {
    user: Option<ChatUser>,
    channels: HashMap<String, StoredChannel>,
}

pub struct InMemoryProvider {
    api_key: String,
    api_secret: String,
    state: RwLock<ProviderState>,
}

impl InMemoryProvider {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            state: RwLock::new(ProviderState::default()),
        }
    }

    /// Profile of the connected user.
    pub fn connected_user(&self) -> Option<ChatUser> {
        self.state.read().user.clone()
    }

    /// Messages posted to a channel, oldest first.
    pub fn messages(&self, channel_id: &str) -> Vec<ChannelMessage> {
        self.state
            .read()
            .channels
            .get(channel_id)
            .map(|c| c.messages.clone())
            .unwrap_or_default()
    }

    pub fn channel_count(&self) -> usize {
        self.state.read().channels.len()
    }
}

#[async_trait]
impl ChatProvider for InMemoryProvider {
    fn current_user_id(&self) -> Option<String> {
        self.state.read().user.as_ref().map(|u| u.id.clone())
    }

    async fn connect_user(&self, api_key: &str, user: &ChatUser, token: &str) -> Result<(), ProviderError> {
        if api_key != self.api_key {
            warn!("[PROVIDER] connect_user with a foreign API key");
            return Err(ProviderError::ApiKeyMismatch);
        }

        let claims = decode_provider_token(token, &self.api_secret)
            .map_err(|e| ProviderError::InvalidToken(e.to_string()))?;
        if claims.user_id != user.id {
            warn!("[PROVIDER] Token issued for {} presented by {}", claims.user_id, user.id);
            return Err(ProviderError::InvalidToken(
                "token user_id does not match the connecting user".to_string(),
            ));
        }

        let mut state = self.state.write();
        if let Some(current) = &state.user {
            if current.id != user.id {
                return Err(ProviderError::AlreadyConnected(current.id.clone()));
            }
            debug!("[PROVIDER] {} already connected", user.id);
            return Ok(());
        }

        info!("[PROVIDER] Connected {}", user.id);
        state.user = Some(user.clone());
        Ok(())
    }

    async fn disconnect_user(&self) -> Result<(), ProviderError> {
        if let Some(user) = self.state.write().user.take() {
            info!("[PROVIDER] Disconnected {}", user.id);
        }
        Ok(())
    }

    async fn watch_channel(&self, spec: &ChannelSpec) -> Result<ChannelHandle, ProviderError> {
        let mut state = self.state.write();
        let user_id = state
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(ProviderError::NotConnected)?;

        if !state.channels.contains_key(&spec.id) {
            if !spec.members.contains(&user_id) {
                return Err(ProviderError::NotMember(user_id));
            }
            info!("[PROVIDER] Created channel {}:{}", spec.kind, spec.id);
            state.channels.insert(
                spec.id.clone(),
                StoredChannel {
                    kind: spec.kind.clone(),
                    members: spec.members.clone(),
                    messages: Vec::new(),
                },
            );
        }

        let channel = &state.channels[&spec.id];
        if !channel.members.contains(&user_id) {
            return Err(ProviderError::NotMember(user_id));
        }

        Ok(ChannelHandle {
            kind: channel.kind.clone(),
            id: spec.id.clone(),
            members: channel.members.clone(),
        })
    }

    async fn send_message(&self, channel: &ChannelHandle, text: &str) -> Result<(), ProviderError> {
        let mut state = self.state.write();
        let user_id = state
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(ProviderError::NotConnected)?;

        let stored = state
            .channels
            .get_mut(&channel.id)
            .ok_or_else(|| ProviderError::ChannelNotFound(channel.cid()))?;

        if !stored.members.contains(&user_id) {
            return Err(ProviderError::NotMember(user_id));
        }

        stored.messages.push(ChannelMessage {
            user_id,
            text: text.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_auth::{HmacTokenSigner, TokenSigner};

    const KEY: &str = "publickey123456";
    const SECRET: &str = "provider-secret-for-memory-tests";

    fn token_for(user_id: &str) -> String {
        HmacTokenSigner.create_token(SECRET, user_id).unwrap()
    }

    #[tokio::test]
    async fn test_connect_requires_matching_token() {
        let provider = InMemoryProvider::new(KEY, SECRET);
        let alice = ChatUser::new("alice", "Alice");

        let result = provider.connect_user(KEY, &alice, &token_for("bob")).await;

        assert!(matches!(result, Err(ProviderError::InvalidToken(_))));
        assert_eq!(provider.current_user_id(), None);
    }

    #[tokio::test]
    async fn test_connect_rejects_foreign_api_key() {
        let provider = InMemoryProvider::new(KEY, SECRET);
        let alice = ChatUser::new("alice", "Alice");

        let result = provider.connect_user("other-key", &alice, &token_for("alice")).await;

        assert_eq!(result, Err(ProviderError::ApiKeyMismatch));
    }

    #[tokio::test]
    async fn test_second_user_needs_disconnect_first() {
        let provider = InMemoryProvider::new(KEY, SECRET);
        provider
            .connect_user(KEY, &ChatUser::new("alice", "Alice"), &token_for("alice"))
            .await
            .unwrap();

        let bob = ChatUser::new("bob", "Bob");
        let result = provider.connect_user(KEY, &bob, &token_for("bob")).await;
        assert_eq!(result, Err(ProviderError::AlreadyConnected("alice".to_string())));

        provider.disconnect_user().await.unwrap();
        provider.connect_user(KEY, &bob, &token_for("bob")).await.unwrap();
        assert_eq!(provider.current_user_id().as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn test_watch_creates_once_and_stores_messages() {
        let provider = InMemoryProvider::new(KEY, SECRET);
        provider
            .connect_user(KEY, &ChatUser::new("u1", "One"), &token_for("u1"))
            .await
            .unwrap();
        let spec = ChannelSpec::messaging("u1-u2", vec!["u1".to_string(), "u2".to_string()]);

        let first = provider.watch_channel(&spec).await.unwrap();
        let second = provider.watch_channel(&spec).await.unwrap();
        provider.send_message(&first, "hello").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.channel_count(), 1);
        assert_eq!(
            provider.messages("u1-u2"),
            vec![ChannelMessage { user_id: "u1".to_string(), text: "hello".to_string() }]
        );
    }

    #[tokio::test]
    async fn test_watch_without_session_fails() {
        let provider = InMemoryProvider::new(KEY, SECRET);
        let spec = ChannelSpec::messaging("u1-u2", vec!["u1".to_string(), "u2".to_string()]);

        assert_eq!(provider.watch_channel(&spec).await, Err(ProviderError::NotConnected));
    }
}
