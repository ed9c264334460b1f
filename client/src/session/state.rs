use crate::core::ChannelHandle;

/// Lifecycle of the chat session as a UI sees it.
///
/// `Idle -> Connecting -> Ready | Error`. A new attempt from any state goes
/// back to `Connecting`; teardown returns to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Connecting,
    Ready(ChannelHandle),
    /// Last attempt failed; holds the error's display text.
    Error(String),
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready(_))
    }

    pub fn channel(&self) -> Option<&ChannelHandle> {
        match self {
            SessionState::Ready(channel) => Some(channel),
            _ => None,
        }
    }
}
