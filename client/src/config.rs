//! Client configuration.

use std::env;

/// Default API origin when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:4000";

/// Configuration selecting which API origin to call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API service, without a trailing slash
    pub api_base: String,
}

impl ClientConfig {
    /// Load configuration from `TICKLIST_API_BASE`, falling back to the
    /// local default
    #[must_use]
    pub fn from_env() -> Self {
        let api_base = env::var("TICKLIST_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        Self { api_base }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
