//! Collection repositories over a key-value store.

mod local;
pub mod seed;

pub use local::LocalCollectionRepository;

#[cfg(test)]
mod tests;
