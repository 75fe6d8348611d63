use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string slots addressed by a fixed key.
///
/// Values are opaque to storage; callers own their encoding.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub local: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let local: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { local }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_previous_value() {
        let repo = InMemoryRepository::new();
        repo.put_value("slot", "first").await.unwrap();
        repo.put_value("slot", "second").await.unwrap();
        assert_eq!(
            repo.get_value("slot").await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let repo = InMemoryRepository::new();
        repo.delete_value("absent").await.unwrap();
        assert_eq!(repo.get_value("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let storage = Storage::in_memory();
        let other = storage.clone();
        storage.local.put_value("k", "v").await.unwrap();
        assert_eq!(other.local.get_value("k").await.unwrap().as_deref(), Some("v"));
    }
}
