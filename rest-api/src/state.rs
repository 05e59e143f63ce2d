use std::sync::Arc;
use std::time::Duration;

/// Shared state handed to every request handler.
///
/// Holds the store and the per-operation deadline. Handlers own no other
/// mutable state; everything shared lives behind the store.
pub struct AppState<S> {
    /// The persistence boundary
    pub store: Arc<S>,
    /// Deadline applied to each store call made on behalf of a request
    pub op_timeout: Duration,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, op_timeout: Duration) -> Self {
        Self { store, op_timeout }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            op_timeout: self.op_timeout,
        }
    }
}
