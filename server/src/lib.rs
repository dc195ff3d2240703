//! # Ticklist Server
//!
//! HTTP API service exposing the todo collection over five endpoints:
//!
//! - `GET /todos` - full collection, ordered newest first
//! - `POST /todos` - create a todo from `{title}`
//! - `PATCH /todos/{id}` - update title and/or done, independently
//! - `DELETE /todos/{id}` - remove a todo
//! - `GET /health` - liveness probe
//!
//! Every mutating request performs a full read-modify-write cycle against
//! the file-backed store: read the whole collection, locate the record by
//! linear scan, mutate, write the whole collection back. Two concurrently
//! arriving requests can interleave their read and write phases; this
//! lost-update race is accepted for the single-local-user target.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::app_router;
pub use state::AppState;
