//! Redis store with connection management and per-origin key namespacing.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use pressdesk_core::ports::{KeyValueStore, StoreError};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Prefix applied to every key, standing in for the storage origin
    pub namespace: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            namespace: "pressdesk".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            namespace: std::env::var("REDIS_NAMESPACE")
                .unwrap_or_else(|_| "pressdesk".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Redis-backed store.
///
/// Uses connection manager for automatic reconnection.
pub struct RedisStore {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisStore {
    pub async fn new(config: RedisConfig) -> Result<Self, StoreError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| StoreError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| StoreError::Connection("Connection timed out".to_string()))?
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            "Connected to Redis store"
        );

        Ok(Self {
            conn,
            namespace: config.namespace,
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(self.namespaced(key))
            .await
            .map_err(|e| {
                tracing::warn!(key = %key, error = %e, "Redis GET failed");
                StoreError::Read(e.to_string())
            })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.namespaced(key), value)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.namespaced(key))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn contains(&self, key: &str) -> bool {
        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(self.namespaced(key))
            .await
            .unwrap_or(false)
    }
}
