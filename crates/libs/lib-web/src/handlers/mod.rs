//! # HTTP Handlers
//!
//! - **[`chat`]**: Chat provider token issuance

pub mod chat;
