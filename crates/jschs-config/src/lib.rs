//! # jschs Config
//!
//! Configuration types for the jschs API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen address and request timeout
//! - [`database`]: PostgreSQL connection settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`password`]: Password hashing cost
//! - [`logging`]: Log directory and format
//!
//! Every type exposes `from_env()`, falling back to its [`Default`] for any
//! variable that is unset or cannot be parsed.
//!
//! # Example
//!
//! ```ignore
//! use jschs_config::{CorsConfig, DatabaseConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod logging;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use password::PasswordConfig;
pub use server::ServerConfig;

use std::str::FromStr;

/// Look up `key` and parse it, falling back to `default` when the variable is
/// missing, blank, or unparsable.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
