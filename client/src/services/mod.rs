//! # Services
//!
//! - **[`api`]**: HTTP client for the backend API server
//! - **[`provider`]**: Chat provider implementations

pub mod api;
pub mod provider;
