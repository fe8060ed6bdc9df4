//! Domain-level error types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ContentKind, ItemId};
use crate::ports::StoreError;

/// Domain errors - business rule failures surfaced to a page.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{kind} not found: id {id}")]
    NotFound { kind: ContentKind, id: ItemId },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Whether retrying the same operation later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RepoError::Store(
                StoreError::Connection(_) | StoreError::Write(_) | StoreError::QuotaExceeded { .. }
            )
        )
    }
}

/// Field key to message mapping produced by a failed validation.
///
/// Keys are the persisted field names (`title`, `seoTitle`, ...), so a form
/// can show each message next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A string did not name any known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {what}: {value:?}")]
pub struct ParseError {
    pub what: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
