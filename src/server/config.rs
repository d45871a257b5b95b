//! Server configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::time::Duration;

use super::retell;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub port: u16,

    /// Retell API key; the call relay answers 500 without it
    pub retell_api_key: Option<String>,

    /// Retell API base URL
    pub retell_base_url: String,

    /// Artificial delay before `GET /api/agents` answers
    pub agent_fetch_delay: Duration,

    /// Allowed CORS origin (any origin when unset)
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            retell_api_key: None,
            retell_base_url: retell::DEFAULT_BASE_URL.to_string(),
            agent_fetch_delay: Duration::from_millis(500),
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            retell_api_key: non_empty("RETELL_API_KEY"),
            retell_base_url: non_empty("RETELL_BASE_URL").unwrap_or(defaults.retell_base_url),
            agent_fetch_delay: non_empty("AGENT_FETCH_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.agent_fetch_delay),
            cors_origin: non_empty("CORS_ORIGIN"),
        }
    }
}
