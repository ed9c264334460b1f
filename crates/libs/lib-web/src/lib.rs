//! # Web Library
//!
//! HTTP handlers, middleware, and web services for the chat token backend.

pub mod handlers;
pub mod middleware;
pub mod services;
pub mod server;

pub use server::{create_router, start_server, AppState, ServerConfig};
