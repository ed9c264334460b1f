//! # Web Services
//!
//! Business logic behind the HTTP handlers.

pub mod chat;

pub use chat::TokenIssuer;
