//! Runtime configuration
//!
//! Built once at startup and handed to each component's constructor.
//! Missing credentials are a startup precondition failure, not a runtime one.

use std::time::Duration;
use thiserror::Error;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const ENDPOINT_VAR: &str = "HOMEWORK_BOT_ENDPOINT";
pub const TELEGRAM_API_URL_VAR: &str = "HOMEWORK_BOT_TELEGRAM_API_URL";
pub const RETRY_SECS_VAR: &str = "HOMEWORK_BOT_RETRY_SECS";
pub const RETRY_JITTER_SECS_VAR: &str = "HOMEWORK_BOT_RETRY_JITTER_SECS";
pub const HTTP_TIMEOUT_SECS_VAR: &str = "HOMEWORK_BOT_HTTP_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default pause between poll cycles (10 minutes)
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(600);

/// Default per-request HTTP timeout
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Credentials and endpoints for the review API and the Telegram bot
#[derive(Clone)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_interval: Duration,
    /// Upper bound of the random delay added to `retry_interval`
    pub retry_jitter: Duration,
    pub http_timeout: Duration,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Reports every missing credential at once. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            let value = get(name);
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let practicum_token = require(PRACTICUM_TOKEN_VAR);
        let telegram_token = require(TELEGRAM_TOKEN_VAR);
        let telegram_chat_id = require(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get(TELEGRAM_API_URL_VAR)
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval: parse_secs(RETRY_SECS_VAR, get(RETRY_SECS_VAR))?
                .unwrap_or(DEFAULT_RETRY_INTERVAL),
            retry_jitter: parse_secs(RETRY_JITTER_SECS_VAR, get(RETRY_JITTER_SECS_VAR))?
                .unwrap_or(Duration::ZERO),
            http_timeout: parse_secs(HTTP_TIMEOUT_SECS_VAR, get(HTTP_TIMEOUT_SECS_VAR))?
                .unwrap_or(DEFAULT_HTTP_TIMEOUT),
        })
    }
}

fn parse_secs(name: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidValue { name, value })
    })
    .transpose()
}

// Tokens stay out of logs
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("retry_jitter", &self.retry_jitter)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
