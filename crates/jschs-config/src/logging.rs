//! Logging configuration.
//!
//! # Environment Variables
//!
//! - `LOG_DIR`: Directory for rolling log files (default: `storage/logs`)
//! - `LOG_FORMAT`: Console output format, `pretty` or `json` (default: `pretty`)
//!
//! Log levels themselves are controlled through `RUST_LOG`.

use std::str::FromStr;

use crate::env_lookup;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "compact" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "storage/logs".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_dir: lookup("LOG_DIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_dir),
            format: crate::parse_or(&lookup, "LOG_FORMAT", defaults.format),
        }
    }
}
