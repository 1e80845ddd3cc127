//! Core module - infrastructural components
//!
//! Configuration, error taxonomy, application state and session
//! handling. Everything here is domain-agnostic plumbing.

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports to keep imports short
pub use auth::{decode_jwt, encode_jwt, Claims, Session};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
