//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod repository;
mod store;

pub use clock::{Clock, IdGenerator};
pub use repository::CollectionRepository;
pub use store::{KeyValueStore, StoreError};
