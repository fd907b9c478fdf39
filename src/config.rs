//! Configuration management for the address book shell.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Prompt written before each input line (default: "> ")
    pub prompt: String,

    /// Pretty-print the output of the `json` command (default: true)
    pub json_pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_PROMPT`: Shell prompt (default: "> ", may be empty)
    /// - `ADDRESS_BOOK_JSON_PRETTY`: `true`/`false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let json_pretty = Self::parse_env_bool("ADDRESS_BOOK_JSON_PRETTY", defaults.json_pretty)?;

        Ok(Config {
            log_level,
            prompt,
            json_pretty,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            prompt: "> ".to_string(),
            json_pretty: true,
        }
    }
}
