//! Settings for the bundled ureq transports.
//!
//! Values come from JSON (`from_json`) or from `HTTP_CLIENT_*` environment
//! variables (`from_env`). Anything missing keeps its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const ENV_TIMEOUT_MS: &str = "HTTP_CLIENT_TIMEOUT_MS";
pub const ENV_MAX_IDLE_PER_HOST: &str = "HTTP_CLIENT_MAX_IDLE_PER_HOST";
pub const ENV_MAX_RESPONSE_BYTES: &str = "HTTP_CLIENT_MAX_RESPONSE_BYTES";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid client config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Whole-call timeout in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    pub max_idle_connections_per_host: usize,
    /// Responses with a larger body fail instead of being truncated.
    pub max_response_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Some(30_000),
            max_idle_connections_per_host: 3,
            max_response_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    /// A timeout of `0` disables the timeout.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(ms) = parse(&lookup, ENV_TIMEOUT_MS)? {
            config.timeout_ms = (ms > 0).then_some(ms);
        }
        if let Some(n) = parse(&lookup, ENV_MAX_IDLE_PER_HOST)? {
            config.max_idle_connections_per_host = n;
        }
        if let Some(n) = parse(&lookup, ENV_MAX_RESPONSE_BYTES)? {
            config.max_response_bytes = n;
        }
        Ok(config)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidValue { key, value }),
        },
    }
}
