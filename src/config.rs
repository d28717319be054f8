//! Client configuration
//!
//! Everything the client needs besides the credential: where the API lives,
//! how long a single round trip may take and how the client identifies
//! itself. Defaults target api.github.com; [`ClientConfig::from_env`] applies
//! the `GITHUB_API_URL` and `GITHUB_TIMEOUT_SECS` overrides.

use crate::constants;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: constants::github::API_BASE.to_string(),
            timeout: constants::github::REQUEST_TIMEOUT,
            user_agent: constants::github::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Defaults plus overrides from the process environment
    ///
    /// An unparsable or zero `GITHUB_TIMEOUT_SECS` is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(url) = std::env::var(constants::env::API_URL_VAR)
            && !url.trim().is_empty()
        {
            config = config.with_base_url(url.trim());
        }

        if let Ok(raw) = std::env::var(constants::env::TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => warn!(
                    value = %raw,
                    "ignoring invalid {}, expected a positive number of seconds",
                    constants::env::TIMEOUT_VAR
                ),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
