//! # Session Manager
//!
//! [`ChatSessionManager`] owns the client's single provider session and the
//! channel currently open in it.
//!
//! Each attempt (`init_session` or `open`) gets an [`InitGuard`]. Starting a new
//! attempt or calling [`ChatSessionManager::teardown`] cancels the previous
//! guard, and a cancelled attempt is checked after every await so it ends with
//! [`ClientError::Cancelled`] without touching state. Provider calls are
//! serialized by an async mutex, so a disconnect always completes before the
//! next connect and a watch is never issued before its connect resolves.

use parking_lot::RwLock;
use shared::ChatUser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::core::{ChannelHandle, ChannelSpec, ChatProvider, ClientError, Result, TokenSource};
use crate::notify::{call_url, notify_call_started, Notice};
use crate::session::{derive_channel_id, SessionState};

/// Liveness flag of one initialization attempt.
#[derive(Debug, Clone)]
pub struct InitGuard {
    alive: Arc<AtomicBool>,
}

impl InitGuard {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(ClientError::Cancelled)
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    active: Option<InitGuard>,
}

pub struct ChatSessionManager {
    provider: Arc<dyn ChatProvider>,
    api_key: Option<String>,
    provider_ops: Mutex<()>,
    inner: RwLock<Inner>,
}

impl ChatSessionManager {
    /// `api_key` is the public provider key used by [`open`](Self::open).
    pub fn new(provider: Arc<dyn ChatProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key,
            provider_ops: Mutex::new(()),
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.read().state.clone()
    }

    /// The open channel, when the session is ready.
    pub fn channel(&self) -> Option<ChannelHandle> {
        self.inner.read().state.channel().cloned()
    }

    pub fn provider(&self) -> &Arc<dyn ChatProvider> {
        &self.provider
    }

    /// Connect `self_user` and open the channel shared with `target`.
    ///
    /// Reuses the provider session when it already belongs to `self_user`,
    /// otherwise disconnects it first.
    pub async fn init_session(
        &self,
        self_user: &ChatUser,
        target: &str,
        token: &str,
        api_key: &str,
    ) -> Result<ChannelHandle> {
        let guard = self.begin();
        self.run_init(&guard, self_user, target, token, api_key)
            .await
            .map_err(|e| self.fail(&guard, e))
    }

    /// Fetch a token from `tokens`, then [`init_session`](Self::init_session)
    /// with the configured API key.
    ///
    /// The fetch belongs to the attempt: a late token for a superseded attempt
    /// is dropped.
    pub async fn open(
        &self,
        tokens: &dyn TokenSource,
        session_jwt: &str,
        self_user: &ChatUser,
        target: &str,
    ) -> Result<ChannelHandle> {
        let guard = self.begin();

        let result: Result<ChannelHandle> = async {
            validate_principals(self_user, target)?;
            let token = tokens.get_stream_token(session_jwt).await?;
            guard.ensure_alive()?;

            let api_key = self.api_key.as_deref().unwrap_or_default();
            self.run_init(&guard, self_user, target, &token, api_key).await
        }
        .await;

        result.map_err(|e| self.fail(&guard, e))
    }

    /// Cancel any in-flight attempt and return to `Idle`.
    ///
    /// The provider session is left open for the next conversation.
    pub fn teardown(&self) {
        let mut inner = self.inner.write();
        if let Some(guard) = inner.active.take() {
            guard.cancel();
        }
        inner.state = SessionState::Idle;
        debug!("[SESSION] Torn down");
    }

    /// Tear down and close the provider session.
    pub async fn disconnect(&self) -> Result<()> {
        self.teardown();
        let _ops = self.provider_ops.lock().await;
        self.provider.disconnect_user().await?;
        info!("[SESSION] Provider session closed");
        Ok(())
    }

    /// Post a video-call link for the open channel.
    ///
    /// Returns `None` when no channel is open.
    pub async fn start_video_call(&self, app_origin: &str) -> Option<Notice> {
        let channel = self.channel()?;
        let url = call_url(app_origin, &channel.id);
        let notice = notify_call_started(self.provider.as_ref(), &channel, &url).await;
        debug!("[SESSION] Call notice for {}: {}", channel.id, notice.text());
        Some(notice)
    }

    // region: --- Attempt lifecycle

    fn begin(&self) -> InitGuard {
        let guard = InitGuard::new();
        let mut inner = self.inner.write();
        if let Some(previous) = inner.active.replace(guard.clone()) {
            if previous.is_alive() {
                debug!("[SESSION] Superseding in-flight attempt");
            }
            previous.cancel();
        }
        inner.state = SessionState::Connecting;
        guard
    }

    /// Set the state if `guard` is still the live attempt.
    fn transition(&self, guard: &InitGuard, state: SessionState) -> Result<()> {
        let mut inner = self.inner.write();
        guard.ensure_alive()?;
        inner.state = state;
        Ok(())
    }

    fn fail(&self, guard: &InitGuard, err: ClientError) -> ClientError {
        if err == ClientError::Cancelled {
            debug!("[SESSION] Attempt cancelled");
            return err;
        }

        match self.transition(guard, SessionState::Error(err.to_string())) {
            Ok(()) => {
                error!("[SESSION] Chat initialization failed: {}", err);
                err
            }
            Err(cancelled) => cancelled,
        }
    }

    async fn run_init(
        &self,
        guard: &InitGuard,
        self_user: &ChatUser,
        target: &str,
        token: &str,
        api_key: &str,
    ) -> Result<ChannelHandle> {
        validate_principals(self_user, target)?;
        if token.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }
        if api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let _ops = self.provider_ops.lock().await;
        guard.ensure_alive()?;

        match self.provider.current_user_id() {
            Some(current) if current == self_user.id => {
                debug!("[SESSION] Reusing provider session for {}", current);
            }
            Some(current) => {
                info!("[SESSION] Switching provider session from {} to {}", current, self_user.id);
                self.provider.disconnect_user().await?;
                guard.ensure_alive()?;
            }
            None => {}
        }

        if self.provider.current_user_id().is_none() {
            self.provider.connect_user(api_key, self_user, token).await?;
            guard.ensure_alive()?;
            info!("[SESSION] Connected as {}", self_user.id);
        }

        let channel_id = derive_channel_id(&self_user.id, target);
        if self_user.id == target {
            warn!("[SESSION] Opening self-chat channel {}", channel_id);
        }

        let spec = ChannelSpec::messaging(channel_id, vec![self_user.id.clone(), target.to_string()]);
        let channel = self.provider.watch_channel(&spec).await?;

        self.transition(guard, SessionState::Ready(channel.clone()))?;
        info!("[SESSION] Watching {}", channel.cid());
        Ok(channel)
    }

    // endregion: --- Attempt lifecycle
}

fn validate_principals(self_user: &ChatUser, target: &str) -> Result<()> {
    if self_user.id.trim().is_empty() {
        return Err(ClientError::MissingPrincipal("self"));
    }
    if target.trim().is_empty() {
        return Err(ClientError::MissingPrincipal("target"));
    }
    Ok(())
}
