//! Shared application state.

use std::sync::Arc;

use moviedrop_core::storage::MovieStore;

use crate::storage::InMemoryMovieStore;

/// Shared application state, cloned into each request handler.
///
/// Holds the movie store as a trait object so the binary can wire in
/// DynamoDB while tests inject the in-memory fake.
#[derive(Clone)]
pub struct AppState {
    /// Store the ingest handler writes through.
    pub movie_store: Arc<dyn MovieStore>,
}

impl AppState {
    /// Creates state around an already-constructed store.
    pub fn new(movie_store: Arc<dyn MovieStore>) -> Self {
        Self { movie_store }
    }

    /// State backed by the in-memory store.
    ///
    /// Returns the store handle alongside the state so callers can
    /// inspect what was written.
    pub fn in_memory() -> (Self, Arc<InMemoryMovieStore>) {
        let store = Arc::new(InMemoryMovieStore::new());
        (Self::new(store.clone()), store)
    }
}
