//! # Utilities Library
//!
//! Shared utility functions for environment variables and validation.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt};
pub use validation::{validate_not_empty, validate_min_length};
