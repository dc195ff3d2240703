//! # Ticklist Core
//!
//! Shared domain types for the Ticklist task-list application.
//!
//! This crate defines the single resource the system manages — the todo
//! record — together with the persisted document shape and the `Clock`
//! seam used wherever timestamps are generated.
//!
//! ## Core Concepts
//!
//! - **`Todo`**: the unit resource (id, title, done, created_at)
//! - **`TodoDocument`**: the complete persisted snapshot `{ todos: [...] }`
//! - **`TodoId`**: opaque random identifier, assigned at creation
//! - **`Clock`**: injected time source for deterministic tests

pub mod clock;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use types::{normalize_title, Todo, TodoDocument, TodoId};
