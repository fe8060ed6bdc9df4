//! # Pressdesk Core
//!
//! The domain layer of Pressdesk: content items, the per-kind validation
//! rule table, list filtering and the ports that storage adapters implement.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, ParseError, RepoError, ValidationErrors};
