//! # Verify Config Utility
//!
//! Checks that the chat provider credentials and the session secret are set,
//! without printing secrets.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package verify-config --bin verify_config
//! ```
//!
//! The program will:
//! 1. Load `.env` from the working directory
//! 2. Report each variable (the API key masked, secrets by length only)
//! 3. Flag placeholder values
//! 4. Exit non-zero if anything required is missing

use lib_utils::get_env_opt;
use shared::mask_secret;

/// Values copied from sample `.env` files.
const PLACEHOLDERS: &[&str] = &[
    "your_api_key_here",
    "your_api_secret_here",
    "your_stream_api_key_here",
    "your_stream_api_secret_here",
    "changeme",
];

const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reveal {
    /// First 8 and last 4 characters
    Masked,
    /// Length only
    LengthOnly,
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Ok { shown: String, length: usize },
    Placeholder,
    TooShort { length: usize, min: usize },
    Missing,
}

impl Status {
    fn is_ok(&self) -> bool {
        matches!(self, Status::Ok { .. })
    }
}

fn check(value: Option<&str>, reveal: Reveal, min_len: Option<usize>) -> Status {
    let Some(value) = value else {
        return Status::Missing;
    };

    let lower = value.to_lowercase();
    if PLACEHOLDERS.contains(&lower.as_str()) {
        return Status::Placeholder;
    }

    let length = value.chars().count();
    if let Some(min) = min_len {
        if length < min {
            return Status::TooShort { length, min };
        }
    }

    let shown = match reveal {
        Reveal::Masked => mask_secret(value, 8, 4),
        Reveal::LengthOnly => "(hidden)".to_string(),
    };
    Status::Ok { shown, length }
}

fn report(name: &str, status: &Status) {
    match status {
        Status::Ok { shown, length } => {
            println!("[OK]      {}: Found", name);
            println!("          Value: {}", shown);
            println!("          Length: {} characters", length);
        }
        Status::Placeholder => {
            println!("[WARN]    {}: set but has a placeholder value", name);
        }
        Status::TooShort { length, min } => {
            println!("[WARN]    {}: {} characters, needs at least {}", name, length, min);
        }
        Status::Missing => {
            println!("[MISSING] {}", name);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenvy::dotenv().ok();

    println!("============================================");
    println!("  Chat Provider Configuration Check");
    println!("============================================");
    println!();
    match env_file {
        Some(path) => println!("Loaded {}", path.display()),
        None => println!("No .env file found, using process environment"),
    }
    println!();

    let api_key = get_env_opt("STREAM_API_KEY");
    let api_secret = get_env_opt("STREAM_API_SECRET");
    let jwt_secret = get_env_opt("JWT_SECRET");

    let checks = [
        ("STREAM_API_KEY", check(api_key.as_deref(), Reveal::Masked, None)),
        ("STREAM_API_SECRET", check(api_secret.as_deref(), Reveal::LengthOnly, None)),
        ("JWT_SECRET", check(jwt_secret.as_deref(), Reveal::LengthOnly, Some(MIN_JWT_SECRET_LEN))),
    ];

    for (name, status) in &checks {
        report(name, status);
    }

    println!();
    println!("============================================");

    let failing: Vec<&str> = checks
        .iter()
        .filter(|(_, status)| !status.is_ok())
        .map(|(name, _)| *name)
        .collect();

    if failing.is_empty() {
        println!();
        println!("All chat credentials are configured.");
        println!("Restart the backend if you just changed them.");
        return Ok(());
    }

    println!();
    println!("Next steps:");
    println!("1. Create or edit the backend .env file");
    println!("2. Set STREAM_API_KEY and STREAM_API_SECRET from the provider dashboard");
    println!("3. Set JWT_SECRET to at least {} characters", MIN_JWT_SECRET_LEN);
    println!("4. Set the same STREAM_API_KEY for the client");
    println!("5. Restart the backend");
    println!();

    anyhow::bail!("configuration incomplete: {}", failing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_masked() {
        let status = check(Some("k3y9x8w7v6u5t4s3"), Reveal::Masked, None);

        assert_eq!(
            status,
            Status::Ok { shown: "k3y9x8w7...t4s3".to_string(), length: 16 }
        );
    }

    #[test]
    fn test_secret_shows_length_only() {
        let status = check(Some("super-secret-value"), Reveal::LengthOnly, None);

        match status {
            Status::Ok { shown, length } => {
                assert!(!shown.contains("secret"));
                assert_eq!(length, 18);
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn test_placeholder_flagged() {
        assert_eq!(check(Some("your_api_key_here"), Reveal::Masked, None), Status::Placeholder);
    }

    #[test]
    fn test_short_jwt_secret_flagged() {
        assert_eq!(
            check(Some("short"), Reveal::LengthOnly, Some(MIN_JWT_SECRET_LEN)),
            Status::TooShort { length: 5, min: 32 }
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(check(None, Reveal::Masked, None), Status::Missing);
    }
}
