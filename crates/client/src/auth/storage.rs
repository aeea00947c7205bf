//! Durable session persistence
//!
//! The persisted record is exactly the [`Session`] (user + tokens); nothing
//! transient is written. Real deployments use the JSON file backend, tests
//! use the in-memory one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::types::Session;
use crate::api::ApiError;

/// Trait for session persistence backends.
///
/// Abstracting storage keeps the session store testable and leaves room for
/// other backends (keychain, encrypted file) without touching the store.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load the persisted session, `None` when nothing has been saved.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if the record exists but cannot be read.
    async fn load(&self) -> Result<Option<Session>, ApiError>;

    /// Replace the persisted session.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if the record cannot be written.
    async fn save(&self, session: &Session) -> Result<(), ApiError>;

    /// Remove the persisted session. Removing an absent record succeeds.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if deletion fails.
    async fn clear(&self) -> Result<(), ApiError>;
}

/// JSON-file session storage
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, ApiError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let session = serde_json::from_slice(&bytes)
                    .map_err(|err| ApiError::Storage(format!("corrupt session file: {err}")))?;
                Ok(Some(session))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ApiError::Storage(err.to_string())),
        }
    }

    async fn save(&self, session: &Session) -> Result<(), ApiError> {
        let bytes =
            serde_json::to_vec(session).map_err(|err| ApiError::Storage(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| ApiError::Storage(err.to_string()))?;
            }
        }

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| ApiError::Storage(err.to_string()))?;

        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApiError::Storage(err.to_string())),
        }
    }
}

/// In-memory session storage for tests and ephemeral sessions
#[derive(Default)]
pub struct MemorySessionStorage {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load(&self) -> Result<Option<Session>, ApiError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), ApiError> {
        *self.inner.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        *self.inner.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::TokenPair;
    use super::*;

    fn sample_session() -> Session {
        Session {
            user: None,
            tokens: Some(TokenPair { access: "a1".to_string(), refresh: "r1".to_string() }),
        }
    }

    #[tokio::test]
    async fn file_storage_round_trips_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        assert!(storage.load().await.unwrap().is_none());

        let session = sample_session();
        storage.save(&session).await.unwrap();

        let restored = storage.load().await.unwrap().unwrap();
        assert_eq!(restored, session);
    }

    #[tokio::test]
    async fn file_storage_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        storage.save(&sample_session()).await.unwrap();
        storage.clear().await.unwrap();
        storage.clear().await.unwrap();

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_storage_reports_corrupt_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, b"{broken").await.unwrap();

        let storage = FileSessionStorage::new(&path);
        let err = storage.load().await.unwrap_err();

        assert!(matches!(err, ApiError::Storage(_)));
    }

    #[tokio::test]
    async fn memory_storage_round_trips_the_session() {
        let storage = MemorySessionStorage::new();

        storage.save(&sample_session()).await.unwrap();
        assert_eq!(storage.load().await.unwrap().unwrap(), sample_session());

        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
    }
}
