//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the chat client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat token and chat user DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_secret`]**: Mask credentials for log output
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::chat::TokenResponse;
//! use axum::Json;
//!
//! async fn token() -> Json<TokenResponse> {
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in Client
//!
//! ```rust,ignore
//! use shared::dto::chat::TokenResponse;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let response: TokenResponse = reqwest::Client::new()
//!     .get("http://localhost:3001/api/chat/token")
//!     .bearer_auth("session-jwt")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
