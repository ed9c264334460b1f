//! # Notices and Call Links
//!
//! [`Notice`] is the toast-equivalent a UI renders. [`notify_call_started`]
//! posts a video-call invitation into an open channel.

use tracing::{error, info};

use crate::core::{ChannelHandle, ChatProvider};

pub const CALL_LINK_SENT_NOTICE: &str = "Video call link sent!";
pub const CALL_LINK_FAILED_NOTICE: &str = "Could not send the video call link";

/// A user-facing success or error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Call page URL for a channel: `<origin>/call/<channel id>`.
pub fn call_url(app_origin: &str, channel_id: &str) -> String {
    format!("{}/call/{}", app_origin.trim_end_matches('/'), channel_id)
}

/// Invitation text posted into the channel.
pub fn call_invitation(call_url: &str) -> String {
    format!("I've started a video call. Join me here: {}", call_url)
}

/// Send the video-call link into `channel`.
///
/// Best effort with no retry. Failure only produces an error notice and leaves
/// the channel and session untouched.
pub async fn notify_call_started(
    provider: &dyn ChatProvider,
    channel: &ChannelHandle,
    call_url: &str,
) -> Notice {
    match provider.send_message(channel, &call_invitation(call_url)).await {
        Ok(()) => {
            info!("[CALL] Video call link sent to {}", channel.cid());
            Notice::Success(CALL_LINK_SENT_NOTICE.to_string())
        }
        Err(e) => {
            error!("[CALL] Failed to send video call link to {}: {}", channel.cid(), e);
            Notice::Error(CALL_LINK_FAILED_NOTICE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_url_uses_channel_id() {
        assert_eq!(call_url("http://localhost:5173", "u1-u2"), "http://localhost:5173/call/u1-u2");
        assert_eq!(call_url("https://app.example.com/", "a-b"), "https://app.example.com/call/a-b");
    }

    #[test]
    fn test_invitation_text() {
        assert_eq!(
            call_invitation("http://localhost:5173/call/u1-u2"),
            "I've started a video call. Join me here: http://localhost:5173/call/u1-u2"
        );
    }
}
