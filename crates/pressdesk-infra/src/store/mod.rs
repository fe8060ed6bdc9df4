//! Store implementations - in-memory, JSON files on disk, and Redis.

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};
