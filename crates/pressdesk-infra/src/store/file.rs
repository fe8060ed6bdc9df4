//! File-backed store: one `<key>.json` file per key under a root directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use pressdesk_core::ports::{KeyValueStore, StoreError};

/// Persistent store rooted at a directory, which plays the role of the
/// storage origin. Writes go to a temporary sibling and are renamed into
/// place, so a crash never leaves a half-written value behind.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) the store directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::Connection(format!("{}: {e}", root.display())))?;

        tracing::info!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "File store read failed");
                Err(StoreError::Read(e.to_string()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(key = %key, bytes = value.len(), "File store write");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(e.to_string())),
        }
    }

    async fn contains(&self, key: &str) -> bool {
        match self.path_for(key) {
            Ok(path) => fs::try_exists(path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}
