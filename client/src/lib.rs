//! # Ticklist Client
//!
//! HTTP client and client-side state for the Ticklist API.
//!
//! Two layers:
//!
//! - [`ApiClient`]: a thin reqwest wrapper that maps the five HTTP endpoints
//!   into typed calls and errors.
//! - [`Controller`]: the authoritative-for-display copy of the collection.
//!   Every mutation is optimistic: snapshot, apply locally, issue the
//!   request, and revert to the snapshot if the request fails. No retries,
//!   no backoff, at most one request per user action.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;

pub use api::{ApiClient, HealthStatus, TodoApi, TodoPatch};
pub use config::ClientConfig;
pub use controller::{Controller, Filter, LoadStatus};
pub use error::ClientError;
