//! Error types for the Ticklist API client.

use thiserror::Error;

/// Errors that can occur when talking to the Ticklist API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the request body (400)
    #[error("{0}")]
    Validation(String),

    /// The record does not exist on the server (404)
    #[error("Not found")]
    NotFound,

    /// The server returned an unexpected status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the server, if any
        message: String,
    },

    /// The request never completed (network unreachable, refused, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be parsed
    #[error("Response parsing failed: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
