//! # Core Library
//!
//! Configuration and the application-wide error type shared by the web layer.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, StreamCredentials};
pub use error::{AppError, Result};
