//! Storage collaborators for the persisted configuration document.
//!
//! The synchronizer only ever sees the [`SettingsStore`] trait; the host
//! environment decides where the JSON document actually lives.

use crate::error::{Result, StoreError};
use async_trait::async_trait;
use directories::ProjectDirs;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Opaque key-value storage for one JSON configuration document.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the persisted document. A store with nothing persisted yet
    /// returns `Value::Null` rather than an error.
    async fn get(&self) -> Result<Value>;

    /// Replace the persisted document.
    async fn set(&self, document: Value) -> Result<()>;
}

/// File-backed store keeping the document as pretty-printed JSON.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location.
    ///
    /// # Errors
    /// Returns error if the platform base directories cannot be determined.
    pub fn with_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// The platform default document location:
    /// `<data dir>/ioclens/preferences.json`.
    ///
    /// # Errors
    /// Returns error if the platform base directories cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "ioclens", "ioclens").ok_or(StoreError::NoDataDir)?;
        Ok(dirs.data_dir().join("preferences.json"))
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn get(&self) -> Result<Value> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no document at {}, treating as first run", self.path.display());
                Ok(Value::Null)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, document: Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(&document)?;
        debug!("writing document to {}", self.path.display());
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

/// In-memory store used by tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Value>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a document.
    #[must_use]
    pub fn with_document(document: Value) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self) -> Result<Value> {
        Ok(self
            .document
            .lock()
            .expect("mutex poisoned: another task panicked while holding the lock")
            .clone())
    }

    async fn set(&self, document: Value) -> Result<()> {
        *self
            .document
            .lock()
            .expect("mutex poisoned: another task panicked while holding the lock") = document;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::new(tmp.path().join("preferences.json"));

        let doc = json!({"ip": {"active": true}});
        store.set(doc.clone()).await.expect("write document");

        let read = store.get().await.expect("read document");
        assert_eq!(read, doc);
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_null() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::new(tmp.path().join("never-written.json"));

        let read = store.get().await.expect("read missing document");
        assert_eq!(read, Value::Null);
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_dirs() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::new(tmp.path().join("nested/dir/preferences.json"));

        store.set(json!({})).await.expect("write document");
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_file_store_corrupt_document_errors() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("preferences.json");
        std::fs::write(&path, "{not json").expect("write corrupt file");

        let store = JsonFileStore::new(path);
        let err = store.get().await.expect_err("corrupt document should fail");
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get().await.expect("read empty"), Value::Null);

        store.set(json!([1, 2])).await.expect("write");
        assert_eq!(store.get().await.expect("read"), json!([1, 2]));
    }
}
