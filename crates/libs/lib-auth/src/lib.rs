//! # Authentication Library
//!
//! App session JWT management and chat provider token signing.
//!
//! - **[`token`]**: session tokens issued by the application's login flow and
//!   verified by the web layer's auth middleware
//! - **[`provider`]**: tokens minted for the chat provider SDK, signed with the
//!   provider API secret

pub mod provider;
pub mod token;

// Re-export commonly used types
pub use provider::{decode_provider_token, HmacTokenSigner, ProviderClaims, TokenError, TokenSigner};
pub use token::{Claims, encode_jwt, decode_jwt};
