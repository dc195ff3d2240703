//! Typed HTTP client for the Ticklist API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use ticklist_core::{Todo, TodoId};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Partial update for a todo; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TodoPatch {
    /// Patch that only changes the done flag
    #[must_use]
    pub const fn done(done: bool) -> Self {
        Self {
            title: None,
            done: Some(done),
        }
    }

    /// Patch that only changes the title
    #[must_use]
    pub const fn title(title: String) -> Self {
        Self {
            title: Some(title),
            done: None,
        }
    }
}

/// Body of `POST /todos`
#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    title: &'a str,
}

/// Body of the server's error responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Whether the service reports itself up
    pub ok: bool,
    /// Server time at the probe
    pub time: DateTime<Utc>,
}

/// The four todo operations the Controller needs.
///
/// [`ApiClient`] is the production implementation; tests substitute a
/// scripted mock to exercise rollback paths.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch the full collection, ordered newest first
    async fn list(&self) -> Result<Vec<Todo>, ClientError>;

    /// Create a todo from a title, returning the server record
    async fn create(&self, title: &str) -> Result<Todo, ClientError>;

    /// Update title and/or done, returning the updated record
    async fn update(&self, id: &TodoId, patch: TodoPatch) -> Result<Todo, ClientError>;

    /// Delete a todo
    async fn delete(&self, id: &TodoId) -> Result<(), ClientError>;
}

/// Ticklist API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_base: String,
}

impl ApiClient {
    /// Create a client against the given API origin
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
        }
    }

    /// Create a client from `TICKLIST_API_BASE` (or the local default)
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Probe `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-200 status.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        parse_json(response, StatusCode::OK).await
    }

    async fn error_for(response: Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => String::new(),
        };

        match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound,
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Parse a JSON body when the status matches, otherwise map the error.
async fn parse_json<T: serde::de::DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, ClientError> {
    if response.status() == expected {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    } else {
        Err(ApiClient::error_for(response).await)
    }
}

#[async_trait]
impl TodoApi for ApiClient {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.client.get(self.url("/todos")).send().await?;
        parse_json(response, StatusCode::OK).await
    }

    async fn create(&self, title: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(&CreateBody { title })
            .send()
            .await?;
        parse_json(response, StatusCode::CREATED).await
    }

    async fn update(&self, id: &TodoId, patch: TodoPatch) -> Result<Todo, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/todos/{id}")))
            .json(&patch)
            .send()
            .await?;
        parse_json(response, StatusCode::OK).await
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(Self::error_for(response).await)
        }
    }
}
