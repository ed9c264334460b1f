//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.len() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("u1", "User ID").is_ok());
        assert_eq!(
            validate_not_empty("  ", "User ID"),
            Err("User ID cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_min_length() {
        assert!(validate_min_length("abc", 3, "Secret").is_ok());
        assert_eq!(
            validate_min_length("ab", 3, "Secret"),
            Err("Secret must be at least 3 characters".to_string())
        );
    }
}
