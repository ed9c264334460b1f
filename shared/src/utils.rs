//! # Shared Utility Functions
//!
//! Common utility functions used across the backend, the chat client, and the
//! configuration checker.
//!
//! ## Credential Masking
//!
//! Functions for showing credentials in logs without exposing them:
//! - [`mask_secret`] - Show the first N and last M characters of a value
//! - [`mask_key`] - Show only the first 8 characters (startup log format)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_secret;
//!
//! let key = "abcd1234efgh5678";
//! assert_eq!(mask_secret(key, 8, 4), "abcd1234...5678");
//! ```

/// Mask a credential by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Values too short to hide anything are fully masked, so short secrets never
/// appear verbatim.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_secret;
///
/// assert_eq!(mask_secret("abcd1234efgh5678", 8, 4), "abcd1234...5678");
/// assert_eq!(mask_secret("short", 8, 4), "***");
/// ```
pub fn mask_secret(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return "***".to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Mask an API key showing only its first 8 characters.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_key;
///
/// assert_eq!(mask_key("abcd1234efgh5678"), "abcd1234...");
/// assert_eq!(mask_key("abc"), "***");
/// ```
pub fn mask_key(value: &str) -> String {
    if value.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret_standard() {
        assert_eq!(mask_secret("k3y9x8w7v6u5t4s3", 8, 4), "k3y9x8w7...t4s3");
    }

    #[test]
    fn test_mask_secret_boundary() {
        // Exactly prefix + suffix characters reveals the whole value, so it is masked
        assert_eq!(mask_secret("123456789012", 8, 4), "***");
        assert_eq!(mask_secret("1234567890123", 8, 4), "12345678...0123");
    }

    #[test]
    fn test_mask_secret_empty() {
        assert_eq!(mask_secret("", 8, 4), "***");
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("mz8xk2p9qq"), "mz8xk2p9...");
        assert_eq!(mask_key("12345678"), "***");
    }
}
