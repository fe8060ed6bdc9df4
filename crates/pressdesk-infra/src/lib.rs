//! # Pressdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `pressdesk-core`:
//! key-value stores, clocks, id generators and the collection repository.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory and file stores only
//! - `redis` - Redis-backed store

pub mod clock;
pub mod repository;
pub mod store;

// Re-exports
pub use clock::{FixedClock, MonotonicIdGenerator, SystemClock, TimestampIdGenerator};
pub use repository::LocalCollectionRepository;
pub use store::{InMemoryStore, JsonFileStore};

#[cfg(feature = "redis")]
pub use store::{RedisConfig, RedisStore};
