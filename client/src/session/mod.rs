//! # Chat Session
//!
//! - **[`channel_id`]**: Deterministic two-party channel ids
//! - **[`state`]**: Session state machine
//! - **[`manager`]**: Session initializer with cancellation

pub mod channel_id;
pub mod manager;
pub mod state;

pub use channel_id::derive_channel_id;
pub use manager::{ChatSessionManager, InitGuard};
pub use state::SessionState;
