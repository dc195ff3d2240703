//! Configuration for the API server.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (`TICKLIST_HOST`, default `127.0.0.1`)
    pub host: String,
    /// Port to bind to (`TICKLIST_PORT` or `PORT`, default `4000`)
    pub port: u16,
    /// Path to the backing document (`TICKLIST_DB_PATH`, default `db.json`)
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("TICKLIST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("TICKLIST_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            db_path: env::var("TICKLIST_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("db.json")),
        }
    }

    /// The socket address string to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            db_path: PathBuf::from("db.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }
}
