//! Domain types for the todo collection.
//!
//! A todo list is an ordered sequence of records; insertion order is
//! meaningful for display and new records are placed at the front. The
//! persisted document is always a complete snapshot of the collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo record.
///
/// Assigned once at creation from a random v4 UUID and immutable
/// thereafter. Collision resistance is assumed; no uniqueness check is
/// performed against the collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Title of the todo; never empty or whitespace-only
    pub title: String,
    /// Whether the todo is completed
    pub done: bool,
    /// When the todo was created; set once, immutable
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo record with `done = false`
    #[must_use]
    pub const fn new(id: TodoId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            done: false,
            created_at,
        }
    }
}

/// The complete persisted snapshot of the todo collection.
///
/// Order is meaningful: index 0 is the newest record. Every write replaces
/// the entire document; there are no partial or delta writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDocument {
    /// All todos, newest first
    pub todos: Vec<Todo>,
}

impl TodoDocument {
    /// Creates a new empty document
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Checks whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns a record by id (linear scan)
    #[must_use]
    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Returns a mutable record by id (linear scan)
    pub fn find_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| &t.id == id)
    }

    /// Inserts a record at the front of the collection
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Removes a record by id, returning it if present
    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let idx = self.todos.iter().position(|t| &t.id == id)?;
        Some(self.todos.remove(idx))
    }
}

/// Trims a title, returning `None` when the result is empty.
///
/// Both create and rename go through this: a title that survives is
/// guaranteed non-empty, which is the collection's one content invariant.
#[must_use]
pub fn normalize_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
