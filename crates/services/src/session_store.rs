use std::sync::Arc;

use artlearn_core::model::User;
use storage::repository::KeyValueRepository;

use crate::error::SessionStoreError;

/// Storage key holding the JSON-encoded active profile.
pub const SESSION_STORAGE_KEY: &str = "artlearn_user";

/// Single-slot store for the active profile.
///
/// Reads never fail: a missing, unreadable or malformed slot is reported as
/// no session.
#[derive(Clone)]
pub struct SessionStore {
    repo: Arc<dyn KeyValueRepository>,
}

impl SessionStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { repo }
    }

    /// Current profile, if one is stored and decodes.
    pub async fn get(&self) -> Option<User> {
        let raw = match self.repo.get_value(SESSION_STORAGE_KEY).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "session slot could not be read");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed session data");
                None
            }
        }
    }

    /// Replace the stored profile with `user`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the record cannot be encoded or stored.
    pub async fn set(&self, user: &User) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string(user)?;
        self.repo.put_value(SESSION_STORAGE_KEY, &raw).await?;
        tracing::info!(user_id = %user.id, "session stored");
        Ok(())
    }

    /// Remove the stored profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the slot cannot be cleared.
    pub async fn clear(&self) -> Result<(), SessionStoreError> {
        self.repo.delete_value(SESSION_STORAGE_KEY).await?;
        tracing::info!("session cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.get().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artlearn_core::model::UserId;
    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};

    fn ana() -> User {
        User {
            id: UserId::new(7),
            username: "Ana".into(),
            email: "ana@x.com".into(),
            level: "Beginner".into(),
            total_xp: 120,
            avatar_url: None,
            completed_lessons: Some(2),
            completed_exercises: None,
        }
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = SessionStore::new(Arc::new(InMemoryRepository::new()));
        assert!(!store.is_authenticated().await);

        store.set(&ana()).await.unwrap();
        assert_eq!(store.get().await, Some(ana()));
        assert!(store.is_authenticated().await);

        store.clear().await.unwrap();
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn set_overwrites_without_merging() {
        let store = SessionStore::new(Arc::new(InMemoryRepository::new()));
        store.set(&ana()).await.unwrap();

        let mut other = ana();
        other.id = UserId::new(8);
        other.completed_lessons = None;
        store.set(&other).await.unwrap();

        assert_eq!(store.get().await, Some(other));
    }

    #[tokio::test]
    async fn malformed_slot_reads_as_absent() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.put_value(SESSION_STORAGE_KEY, "{not json").await.unwrap();
        let store = SessionStore::new(repo.clone());
        assert_eq!(store.get().await, None);

        repo.put_value(SESSION_STORAGE_KEY, r#"{"id":"x"}"#).await.unwrap();
        assert!(!store.is_authenticated().await);
    }

    struct BrokenRepo;

    #[async_trait]
    impl KeyValueRepository for BrokenRepo {
        async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }

        async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }

        async fn delete_value(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }
    }

    #[tokio::test]
    async fn storage_failure_reads_as_absent_but_writes_report() {
        let store = SessionStore::new(Arc::new(BrokenRepo));
        assert_eq!(store.get().await, None);
        assert!(matches!(
            store.set(&ana()).await,
            Err(SessionStoreError::Storage(_))
        ));
    }
}
