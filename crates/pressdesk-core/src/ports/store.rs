use async_trait::async_trait;

/// Key-value store trait - abstraction over origin-scoped string storage
/// (in-memory, files on disk, Redis).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    async fn contains(&self, key: &str) -> bool;
}

/// Store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Quota exceeded writing {key:?}: needs {needed} bytes, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}
