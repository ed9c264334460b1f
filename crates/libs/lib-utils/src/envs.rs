//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an optional environment variable.
///
/// Unset and blank values are both treated as absent.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_opt_blank_is_none() {
        env::set_var("LIB_UTILS_TEST_BLANK", "   ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_BLANK"), None);

        env::set_var("LIB_UTILS_TEST_SET", " value ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_SET").as_deref(), Some("value"));
    }

    #[test]
    fn test_get_env_missing() {
        let result = get_env("LIB_UTILS_TEST_DEFINITELY_UNSET");
        assert!(matches!(result, Err(Error::MissingEnv(_))));
    }
}
