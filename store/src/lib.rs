//! # Ticklist Store
//!
//! File-backed persistence for the todo collection.
//!
//! The store owns a single JSON document holding the entire collection.
//! Reads return the whole document; writes replace it in full. There is no
//! locking and no coordination between writers: concurrent read-modify-write
//! cycles can lose updates, which is accepted for the single-local-user
//! target. Callers must supply well-formed records; no schema validation
//! happens at this layer beyond deserialization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use ticklist_core::TodoDocument;

/// Errors surfaced by store writes.
///
/// Reads never fail the caller: a missing or unreadable backing document
/// reads as the empty collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing document could not be written
    #[error("failed to write backing document: {0}")]
    Io(#[from] io::Error),

    /// The collection could not be serialized
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence handle for the todo collection.
///
/// Holds only the path to the backing document; every operation re-reads or
/// rewrites the file, so the store itself carries no in-memory state.
#[derive(Clone, Debug)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Creates a store backed by the document at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the entire collection.
    ///
    /// A missing, unreadable, or unparseable backing document yields the
    /// empty collection; the failure is logged but never propagated.
    #[must_use]
    pub fn read_all(&self) -> TodoDocument {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "backing document unparseable, treating as empty"
                    );
                    TodoDocument::new()
                }
            },
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "backing document unreadable, treating as empty"
                    );
                }
                TodoDocument::new()
            }
        }
    }

    /// Replaces the entire backing document with the given collection.
    ///
    /// The document is serialized as pretty JSON and written in full; no
    /// partial or delta writes exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization fails or the underlying
    /// medium is unwritable. The error propagates to the caller untouched.
    pub fn write_all(&self, doc: &TodoDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Writes an empty document if the backing file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the bootstrap write fails.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            self.write_all(&TodoDocument::new())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use chrono::Utc;
    use ticklist_core::{Todo, TodoId};

    fn store_in(dir: &tempfile::TempDir) -> TodoStore {
        TodoStore::new(dir.path().join("db.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.read_all().is_empty());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = TodoDocument::new();
        for i in 0..5 {
            doc.prepend(Todo::new(TodoId::new(), format!("todo {i}"), Utc::now()));
        }
        store.write_all(&doc).unwrap();

        let read = store.read_all();
        assert_eq!(read, doc);
        assert_eq!(read.todos[0].title, "todo 4");
    }

    #[test]
    fn write_replaces_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = TodoDocument::new();
        doc.prepend(Todo::new(TodoId::new(), "old".to_string(), Utc::now()));
        store.write_all(&doc).unwrap();

        let mut replacement = TodoDocument::new();
        replacement.prepend(Todo::new(TodoId::new(), "new".to_string(), Utc::now()));
        store.write_all(&replacement).unwrap();

        let read = store.read_all();
        assert_eq!(read.len(), 1);
        assert_eq!(read.todos[0].title, "new");
    }

    #[test]
    fn ensure_exists_bootstraps_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.ensure_exists().unwrap();
        assert!(store.path().exists());
        assert!(store.read_all().is_empty());

        // A second call must not clobber existing data
        let mut doc = TodoDocument::new();
        doc.prepend(Todo::new(TodoId::new(), "kept".to_string(), Utc::now()));
        store.write_all(&doc).unwrap();
        store.ensure_exists().unwrap();

        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn unwritable_medium_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        // Point at a path whose parent does not exist
        let store = TodoStore::new(dir.path().join("missing").join("db.json"));

        let err = store.write_all(&TodoDocument::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
