//! In-memory store - the default for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pressdesk_core::ports::{KeyValueStore, StoreError};

/// In-memory store using a simple HashMap with async RwLock.
///
/// An optional quota caps the summed length of all keys and values, the way
/// a browser caps an origin's local storage.
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    /// Store that rejects writes once the total size would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(bytes),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                tracing::warn!(key = %key, needed, limit, "Store quota exceeded");
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}
