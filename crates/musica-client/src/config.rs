use std::env;
use std::time::Duration;

use crate::error::ClientError;

/// Default backend endpoint, including the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Idle time after the last keystroke before a song search is sent.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// How many toasts are kept before the oldest is evicted.
pub const DEFAULT_TOAST_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub search_debounce: Duration,
    pub toast_capacity: usize,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("MUSICA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            search_debounce: Duration::from_millis(
                env::var("MUSICA_SEARCH_DEBOUNCE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            ),
            toast_capacity: env::var("MUSICA_TOAST_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_TOAST_CAPACITY),
        }
    }

    /// Same defaults as `from_env`, pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check that the base URL parses as an absolute http(s) URL.
    pub fn validate(&self) -> Result<url::Url, ClientError> {
        let parsed = url::Url::parse(&self.base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(parsed)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}
