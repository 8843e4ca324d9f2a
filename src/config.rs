use crate::utils::constants::{DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SESSION_FILE};
use std::{path::PathBuf, time::Duration};

/// Where the journal API lives and where the session token is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset or invalid.
    pub fn from_env() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let mut config = Config::default();

        if let Some(url) = lookup("JOURNAL_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.starts_with("http://") || url.starts_with("https://") {
                config.api_url = url.to_string();
            } else {
                tracing::warn!(
                    "Invalid JOURNAL_API_URL value: '{}' (must start with http:// or https://), using default: {}",
                    url,
                    config.api_url
                );
            }
        }

        if let Some(path) = lookup("JOURNAL_SESSION_FILE") {
            if !path.trim().is_empty() {
                config.session_file = PathBuf::from(path.trim());
            }
        }

        if let Some(timeout) = lookup("JOURNAL_HTTP_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout = Duration::from_secs(secs),
                Ok(_) => {
                    tracing::warn!(
                        "JOURNAL_HTTP_TIMEOUT_SECS must be positive, using default: {}s",
                        config.http_timeout.as_secs()
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse JOURNAL_HTTP_TIMEOUT_SECS '{}': {}, using default: {}s",
                        timeout,
                        e,
                        config.http_timeout.as_secs()
                    );
                }
            }
        }

        config
    }
}
