//! Process-environment configuration for the recipelens service.
//!
//! One required secret (the completion API key) plus a handful of
//! overridable knobs. Loaded once at startup and shared read-only for
//! the life of the process.

use std::env;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Service configuration, resolved from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup("RECIPELENS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let api_base = lookup("RECIPELENS_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.into());

        let max_tokens = parse_var(&lookup, "RECIPELENS_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        let timeout_secs = parse_var(&lookup, "RECIPELENS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let bind_addr = lookup("RECIPELENS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());

        Ok(Config {
            api_key,
            model,
            api_base,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        })
    }

    /// A truncated form of the API key, safe to log.
    pub fn masked_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{prefix}\u{2026} ({} chars)", self.api_key.len())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            key: key.into(),
            value,
        }),
    }
}
