//! Application state shared across HTTP handlers.

use std::sync::Arc;

use ticklist_core::{Clock, SystemClock};
use ticklist_store::TodoStore;

/// State handed to every handler.
///
/// The store is deliberately shared without a lock: each request runs its
/// own read-modify-write cycle and the last write wins, per the accepted
/// concurrency model.
#[derive(Clone)]
pub struct AppState {
    /// File-backed persistence for the todo collection
    pub store: Arc<TodoStore>,
    /// Time source for created-at timestamps and the health probe
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create application state with the system clock
    #[must_use]
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create application state with an injected clock (for tests)
    #[must_use]
    pub fn with_clock(store: TodoStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(store),
            clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
