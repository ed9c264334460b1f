//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the chat client and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat provider token and chat user profile DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/chat/token
//! Authorization: Bearer <session jwt>
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
//! ```

pub mod chat;

pub use chat::*;
