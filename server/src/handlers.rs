//! HTTP handlers for the todo API.
//!
//! Each mutating handler is one read-modify-write cycle: read the whole
//! collection, locate the record by linear scan on id, mutate, write the
//! whole collection back. A failed write leaves the persisted document
//! unchanged and fails only the offending request.

// Handlers are async for axum even though the file-backed store is synchronous.
#![allow(clippy::unused_async)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticklist_core::{normalize_title, Todo, TodoId};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /todos`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    /// Title of the new todo; must be non-empty after trim
    pub title: Option<String>,
}

/// Request body for `PATCH /todos/{id}`.
///
/// Both fields are optional and independently settable; omitted fields are
/// left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    /// New title, trimmed before storage
    pub title: Option<String>,
    /// New completion flag
    pub done: Option<bool>,
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always true when the service is up
    pub ok: bool,
    /// Current server time, RFC 3339
    pub time: DateTime<Utc>,
}

/// List all todos, newest first.
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// ```
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let doc = state.store.read_all();
    Json(doc.todos)
}

/// Create a todo and prepend it to the collection.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// {"title": "Buy milk"}
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "Title is required"}` when the title is missing
/// or blank after trimming, 500 if the backing document cannot be written.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = request
        .title
        .as_deref()
        .and_then(normalize_title)
        .ok_or_else(|| ApiError::bad_request("Title is required"))?;

    let mut doc = state.store.read_all();
    let todo = Todo::new(TodoId::new(), title, state.clock.now());
    doc.prepend(todo.clone());
    state.store.write_all(&doc)?;

    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update a todo's title and/or done flag.
///
/// Only the supplied fields change; `created_at` and `id` are immutable.
///
/// # Endpoint
///
/// ```text
/// PATCH /todos/{id}
/// Content-Type: application/json
///
/// {"done": true}
/// ```
///
/// # Errors
///
/// Returns 404 `{"error": "Not found"}` for an unknown id, 400 when a
/// supplied title is blank after trimming, 500 on write failure.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    // A malformed id can never match a record, so it reads as not-found
    let id: TodoId = id.parse().map_err(|_| ApiError::not_found())?;

    // Validate the title before touching the document so a bad request
    // leaves no trace
    let title = match request.title.as_deref() {
        Some(raw) => Some(normalize_title(raw).ok_or_else(|| {
            ApiError::bad_request("Title is required")
        })?),
        None => None,
    };

    let mut doc = state.store.read_all();
    let todo = doc.find_mut(&id).ok_or_else(ApiError::not_found)?;

    if let Some(title) = title {
        todo.title = title;
    }
    if let Some(done) = request.done {
        todo.done = done;
    }
    let updated = todo.clone();
    state.store.write_all(&doc)?;

    tracing::info!(id = %updated.id, done = updated.done, "todo updated");
    Ok(Json(updated))
}

/// Delete a todo.
///
/// # Endpoint
///
/// ```text
/// DELETE /todos/{id}
/// ```
///
/// # Errors
///
/// Returns 404 `{"error": "Not found"}` for an unknown id, 500 on write
/// failure.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: TodoId = id.parse().map_err(|_| ApiError::not_found())?;

    let mut doc = state.store.read_all();
    doc.remove(&id).ok_or_else(ApiError::not_found)?;
    state.store.write_all(&doc)?;

    tracing::info!(%id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness probe.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: state.clock.now(),
    })
}
