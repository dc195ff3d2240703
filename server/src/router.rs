//! HTTP router for the todo API.
//!
//! Composes all handlers into a single Axum router with CORS and request
//! tracing, mirroring the middleware the browser frontend relied on.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Create the application router with all endpoints.
///
/// # Routes
///
/// - `GET /todos` - list the collection
/// - `POST /todos` - create a todo
/// - `PATCH /todos/{id}` - update title and/or done
/// - `DELETE /todos/{id}` - remove a todo
/// - `GET /health` - liveness probe
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            patch(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
