//! # Core Abstractions
//!
//! - **[`error`]**: Client error type (`ClientError`, `Result<T>`)
//! - **[`service`]**: Traits at the provider and backend seams (`ChatProvider`, `TokenSource`)

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::{ChannelHandle, ChannelSpec, ChatProvider, ProviderError, TokenSource, MESSAGING};
