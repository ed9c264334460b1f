//! # Backend API Client Module
//!
//! HTTP client for communicating with the Axum backend API server.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! └── chat.rs     - Chat token endpoint
//! ```

pub mod chat;
pub mod client;

pub use client::ApiClient;
