//! In-memory movie store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviedrop_core::storage::{MovieStore, Result};
use moviedrop_core::Movie;

/// In-memory storage backend for tests and local development.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<HashMap<String, Movie>>>,
}

impl InMemoryMovieStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    /// Whether nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }

    /// Snapshot of all stored records.
    pub async fn movies(&self) -> Vec<Movie> {
        self.movies.read().await.values().cloned().collect()
    }

    /// Looks up a record by id.
    pub async fn get(&self, id: &str) -> Option<Movie> {
        self.movies.read().await.get(id).cloned()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn put_movie(&self, movie: &Movie) -> Result<()> {
        let mut movies = self.movies.write().await;
        movies.insert(movie.id.clone(), movie.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryMovieStore::new();
        let movie = Movie::new("7", "2015", "Ant-Man");

        store.put_movie(&movie).await.unwrap();

        assert_eq!(store.get("7").await, Some(movie));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_same_id() {
        let store = InMemoryMovieStore::new();

        store
            .put_movie(&Movie::new("7", "2015", "Ant-Man"))
            .await
            .unwrap();
        store
            .put_movie(&Movie::new("7", "2018", "Ant-Man and the Wasp"))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("7").await.unwrap().year, "2018");
    }
}
