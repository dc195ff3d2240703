//! Client-side state controller with optimistic updates.
//!
//! The controller owns the authoritative-for-display copy of the todo
//! collection. Every mutating operation follows the same triple:
//!
//! 1. **snapshot** the collection,
//! 2. **apply** the edit to visible state immediately,
//! 3. **commit** by issuing the request, or **revert** to the snapshot if
//!    it fails.
//!
//! Rollback restores the snapshot taken before the optimistic change, not
//! the state at failure time: any other edits made between request-send and
//! failure are discarded. That is accepted — the controller issues at most
//! one request per user action for a single local user.

use std::sync::Arc;

use chrono::Utc;
use ticklist_core::{normalize_title, Todo, TodoId};

use crate::api::{TodoApi, TodoPatch};
use crate::error::ClientError;

/// View filter over the collection.
///
/// Derives a view-only subset; never mutates stored state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every record
    #[default]
    All,
    /// Only incomplete records
    Active,
    /// Only completed records
    Done,
}

impl Filter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.done,
            Self::Done => todo.done,
        }
    }
}

/// Load state surfaced to the view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Initial load in progress
    Loading,
    /// Initial load failed
    Failed(String),
}

/// Snapshot of the collection taken before an optimistic edit
struct Snapshot(Vec<Todo>);

/// Holds the display copy of the collection and reconciles optimistic
/// local edits against server responses or failures.
pub struct Controller {
    api: Arc<dyn TodoApi>,
    todos: Vec<Todo>,
    filter: Filter,
    status: LoadStatus,
}

impl Controller {
    /// Create a controller over the given API seam
    #[must_use]
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            api,
            todos: Vec::new(),
            filter: Filter::All,
            status: LoadStatus::Idle,
        }
    }

    /// The full in-memory collection, newest first
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Current filter selection
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Current load status
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Select a filter; stored state is untouched
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The post-filter subset the view renders
    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot(self.todos.clone())
    }

    fn revert(&mut self, snapshot: Snapshot) {
        self.todos = snapshot.0;
    }

    /// Fetch the full collection once, tracking loading/error status.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after recording it in [`LoadStatus`].
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.status = LoadStatus::Loading;
        match self.api.list().await {
            Ok(todos) => {
                self.todos = todos;
                self.status = LoadStatus::Idle;
                Ok(())
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Optimistically add a todo at the front of visible state.
    ///
    /// A placeholder with a temporary id appears immediately; on success it
    /// is replaced (matched by that temporary id) with the server record,
    /// on failure it is removed again.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a blank title without
    /// issuing a request, or the create failure after rolling back.
    pub async fn add(&mut self, title: &str) -> Result<(), ClientError> {
        let Some(title) = normalize_title(title) else {
            return Err(ClientError::Validation("Title is required".to_string()));
        };

        let placeholder = Todo::new(TodoId::new(), title.clone(), Utc::now());
        let temp_id = placeholder.id.clone();
        self.todos.insert(0, placeholder);

        match self.api.create(&title).await {
            Ok(created) => {
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == temp_id) {
                    *slot = created;
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "create failed, removing optimistic placeholder");
                self.todos.retain(|t| t.id != temp_id);
                Err(err)
            }
        }
    }

    /// Optimistically set the done flag of a record.
    ///
    /// # Errors
    ///
    /// Returns the update failure after restoring the pre-edit snapshot.
    pub async fn toggle(&mut self, id: &TodoId, done: bool) -> Result<(), ClientError> {
        let snapshot = self.snapshot();
        if let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) {
            todo.done = done;
        }

        match self.api.update(id, TodoPatch::done(done)).await {
            Ok(updated) => {
                self.adopt(updated);
                Ok(())
            }
            Err(err) => {
                self.roll_back(snapshot, &err);
                Err(err)
            }
        }
    }

    /// Optimistically rename a record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a blank title without
    /// issuing a request, or the update failure after restoring the
    /// pre-edit snapshot.
    pub async fn rename(&mut self, id: &TodoId, title: &str) -> Result<(), ClientError> {
        let Some(title) = normalize_title(title) else {
            return Err(ClientError::Validation("Title is required".to_string()));
        };

        let snapshot = self.snapshot();
        if let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) {
            todo.title = title.clone();
        }

        match self.api.update(id, TodoPatch::title(title)).await {
            Ok(updated) => {
                self.adopt(updated);
                Ok(())
            }
            Err(err) => {
                self.roll_back(snapshot, &err);
                Err(err)
            }
        }
    }

    /// Optimistically remove a record.
    ///
    /// # Errors
    ///
    /// Returns the delete failure after restoring the pre-edit snapshot.
    pub async fn delete(&mut self, id: &TodoId) -> Result<(), ClientError> {
        let snapshot = self.snapshot();
        self.todos.retain(|t| &t.id != id);

        match self.api.delete(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.roll_back(snapshot, &err);
                Err(err)
            }
        }
    }

    /// Restore the pre-edit snapshot after a failed mutation
    fn roll_back(&mut self, snapshot: Snapshot, err: &ClientError) {
        tracing::warn!(error = %err, "mutation failed, restoring snapshot");
        self.revert(snapshot);
    }

    /// Replace the local copy of a record with the server's
    fn adopt(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted API mock: each operation pops its next queued result.
    #[derive(Default)]
    struct MockApi {
        list_results: Mutex<Vec<Result<Vec<Todo>, ClientError>>>,
        create_results: Mutex<Vec<Result<Todo, ClientError>>>,
        update_results: Mutex<Vec<Result<Todo, ClientError>>>,
        delete_results: Mutex<Vec<Result<(), ClientError>>>,
    }

    #[async_trait]
    impl TodoApi for MockApi {
        async fn list(&self) -> Result<Vec<Todo>, ClientError> {
            self.list_results.lock().unwrap().remove(0)
        }

        async fn create(&self, _title: &str) -> Result<Todo, ClientError> {
            self.create_results.lock().unwrap().remove(0)
        }

        async fn update(&self, _id: &TodoId, _patch: TodoPatch) -> Result<Todo, ClientError> {
            self.update_results.lock().unwrap().remove(0)
        }

        async fn delete(&self, _id: &TodoId) -> Result<(), ClientError> {
            self.delete_results.lock().unwrap().remove(0)
        }
    }

    fn server_todo(title: &str) -> Todo {
        Todo::new(TodoId::new(), title.to_string(), Utc::now())
    }

    fn failed() -> ClientError {
        ClientError::Transport("connection refused".to_string())
    }

    fn controller_with(api: MockApi) -> Controller {
        Controller::new(Arc::new(api))
    }

    #[tokio::test]
    async fn load_populates_state_and_clears_status() {
        let api = MockApi::default();
        api.list_results
            .lock()
            .unwrap()
            .push(Ok(vec![server_todo("Buy milk")]));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        assert_eq!(controller.todos().len(), 1);
        assert_eq!(controller.status(), &LoadStatus::Idle);
    }

    #[tokio::test]
    async fn load_failure_records_status() {
        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Err(failed()));
        let mut controller = controller_with(api);

        assert!(controller.load().await.is_err());
        assert!(matches!(controller.status(), LoadStatus::Failed(_)));
        assert!(controller.todos().is_empty());
    }

    #[tokio::test]
    async fn add_replaces_placeholder_with_server_record() {
        let created = server_todo("Buy milk");
        let real_id = created.id.clone();

        let api = MockApi::default();
        api.create_results.lock().unwrap().push(Ok(created));
        let mut controller = controller_with(api);

        controller.add("  Buy milk  ").await.unwrap();
        assert_eq!(controller.todos().len(), 1);
        assert_eq!(controller.todos()[0].id, real_id);
        assert_eq!(controller.todos()[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn add_failure_removes_placeholder() {
        let api = MockApi::default();
        api.create_results.lock().unwrap().push(Err(failed()));
        let mut controller = controller_with(api);

        assert!(controller.add("Buy milk").await.is_err());
        assert!(controller.todos().is_empty());
    }

    #[tokio::test]
    async fn add_rejects_blank_title_without_request() {
        // No scripted create result: a request would panic the mock
        let mut controller = controller_with(MockApi::default());

        let err = controller.add("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(controller.todos().is_empty());
    }

    #[tokio::test]
    async fn add_prepends_new_record() {
        let existing = server_todo("old");
        let created = server_todo("new");

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![existing]));
        api.create_results.lock().unwrap().push(Ok(created));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        controller.add("new").await.unwrap();

        assert_eq!(controller.todos()[0].title, "new");
        assert_eq!(controller.todos()[1].title, "old");
    }

    #[tokio::test]
    async fn toggle_applies_then_rolls_back_on_failure() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        api.update_results.lock().unwrap().push(Err(failed()));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        assert!(controller.toggle(&id, true).await.is_err());

        // Rolled back to the snapshot taken before the optimistic edit
        assert!(!controller.todos()[0].done);
    }

    #[tokio::test]
    async fn toggle_adopts_server_record_on_success() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();
        let mut updated = todo.clone();
        updated.done = true;

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        api.update_results.lock().unwrap().push(Ok(updated));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        controller.toggle(&id, true).await.unwrap();
        assert!(controller.todos()[0].done);
    }

    #[tokio::test]
    async fn rename_rolls_back_on_failure() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        api.update_results.lock().unwrap().push(Err(failed()));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        assert!(controller.rename(&id, "Buy oat milk").await.is_err());
        assert_eq!(controller.todos()[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn rename_rejects_blank_title_without_request() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        let err = controller.rename(&id, "   ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(controller.todos()[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn delete_removes_then_restores_on_failure() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        api.delete_results.lock().unwrap().push(Err(failed()));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        assert!(controller.delete(&id).await.is_err());
        assert_eq!(controller.todos().len(), 1);
    }

    #[tokio::test]
    async fn delete_success_removes_record() {
        let todo = server_todo("Buy milk");
        let id = todo.id.clone();

        let api = MockApi::default();
        api.list_results.lock().unwrap().push(Ok(vec![todo]));
        api.delete_results.lock().unwrap().push(Ok(()));
        let mut controller = controller_with(api);

        controller.load().await.unwrap();
        controller.delete(&id).await.unwrap();
        assert!(controller.todos().is_empty());
    }

    #[tokio::test]
    async fn filters_derive_without_mutating() {
        let mut open = server_todo("open");
        open.done = false;
        let mut closed = server_todo("closed");
        closed.done = true;

        let api = MockApi::default();
        api.list_results
            .lock()
            .unwrap()
            .push(Ok(vec![open, closed]));
        let mut controller = controller_with(api);
        controller.load().await.unwrap();

        controller.set_filter(Filter::Active);
        let visible: Vec<_> = controller.visible().iter().map(|t| t.title.clone()).collect();
        assert_eq!(visible, vec!["open"]);

        controller.set_filter(Filter::Done);
        let visible: Vec<_> = controller.visible().iter().map(|t| t.title.clone()).collect();
        assert_eq!(visible, vec!["closed"]);

        controller.set_filter(Filter::All);
        assert_eq!(controller.visible().len(), 2);
        assert_eq!(controller.todos().len(), 2);
    }
}
