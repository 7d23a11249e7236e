//! Configuration for the address book demo binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. The library itself never reads the environment; only `main` does.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the demo binary renders records and confirmations on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one message per line.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Output format (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    ///
    /// A missing `.env` file is fine; a malformed one is an error.
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output = Self::parse_env_output("ADDRESS_BOOK_OUTPUT", OutputFormat::default())?;

        Ok(Config { log_level, output })
    }

    /// Parse an environment variable as an output format with a default value.
    fn parse_env_output(var_name: &str, default: OutputFormat) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}
