//! # Chat Providers
//!
//! Implementations of [`ChatProvider`](crate::core::ChatProvider). Hosted SDK
//! bindings plug in at the same trait.

pub mod memory;

pub use memory::{ChannelMessage, InMemoryProvider};
