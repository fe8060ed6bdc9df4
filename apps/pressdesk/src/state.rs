//! Application state - stores and repositories shared by all pages.

use std::sync::Arc;

use pressdesk_core::domain::{ContentKind, User};
use pressdesk_core::ports::{Clock, CollectionRepository, IdGenerator, KeyValueStore};
use pressdesk_infra::repository::seed;
use pressdesk_infra::{
    InMemoryStore, JsonFileStore, LocalCollectionRepository, MonotonicIdGenerator, SystemClock,
    TimestampIdGenerator,
};

use crate::config::{AppConfig, IdStrategy, StoreBackend};
use crate::error::{AppError, AppResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn CollectionRepository>,
    pub articles: Arc<dyn CollectionRepository>,
    pub blog: Arc<dyn CollectionRepository>,
    pub users: Arc<Vec<User>>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let store = open_store(&config.store).await?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let ids: Arc<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Monotonic => Arc::new(MonotonicIdGenerator::new(clock.clone())),
            IdStrategy::Timestamp => Arc::new(TimestampIdGenerator::new(clock.clone())),
        };

        let state = Self::with_parts(store, ids, clock);
        tracing::debug!("Application state initialized");
        Ok(state)
    }

    /// Wire repositories over an already opened store.
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let repo = |kind| -> Arc<dyn CollectionRepository> {
            Arc::new(LocalCollectionRepository::new(
                kind,
                store.clone(),
                ids.clone(),
                clock.clone(),
            ))
        };

        Self {
            posts: repo(ContentKind::Post),
            articles: repo(ContentKind::Article),
            blog: repo(ContentKind::BlogPost),
            users: Arc::new(seed::users()),
        }
    }

    pub fn repository(&self, kind: ContentKind) -> Arc<dyn CollectionRepository> {
        match kind {
            ContentKind::Post => self.posts.clone(),
            ContentKind::Article => self.articles.clone(),
            ContentKind::BlogPost => self.blog.clone(),
        }
    }
}

async fn open_store(backend: &StoreBackend) -> AppResult<Arc<dyn KeyValueStore>> {
    match backend {
        StoreBackend::Memory { quota_bytes } => {
            tracing::info!(quota_bytes = ?quota_bytes, "Using in-memory store");
            Ok(match quota_bytes {
                Some(bytes) => Arc::new(InMemoryStore::with_quota(*bytes)),
                None => Arc::new(InMemoryStore::new()),
            })
        }
        StoreBackend::File { dir } => {
            let store = JsonFileStore::open(dir.clone())
                .await
                .map_err(|e| AppError::Storage {
                    detail: e.to_string(),
                    retryable: false,
                })?;
            Ok(Arc::new(store))
        }
        StoreBackend::Redis => open_redis().await,
    }
}

#[cfg(feature = "redis")]
async fn open_redis() -> AppResult<Arc<dyn KeyValueStore>> {
    connect_redis(pressdesk_infra::RedisConfig::from_env()).await
}

/// Redis is the only copy of the collections, so an unreachable server is a
/// storage failure rather than a reason to fall back to memory.
#[cfg(feature = "redis")]
async fn connect_redis(
    config: pressdesk_infra::RedisConfig,
) -> AppResult<Arc<dyn KeyValueStore>> {
    let store = pressdesk_infra::RedisStore::new(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to Redis store");
        AppError::Storage {
            detail: e.to_string(),
            retryable: true,
        }
    })?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "redis"))]
async fn open_redis() -> AppResult<Arc<dyn KeyValueStore>> {
    Err(AppError::BadInput(
        "STORE_BACKEND=redis requires the `redis` feature".to_string(),
    ))
}
