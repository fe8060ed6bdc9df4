//! Error handling - maps domain and repository failures to user notices.

use std::fmt;

use pressdesk_core::ValidationErrors;
use pressdesk_core::domain::{ContentKind, ItemId};
use pressdesk_core::error::{DomainError, RepoError};
use pressdesk_shared::ErrorNotice;

/// Application-level error type that converts to an [`ErrorNotice`].
#[derive(Debug)]
pub enum AppError {
    NotFound { kind: ContentKind, id: ItemId },
    Validation(ValidationErrors),
    Storage { detail: String, retryable: bool },
    BadInput(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { kind, id } => write!(f, "{} {} not found", kind.label(), id),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors),
            AppError::Storage { detail, .. } => write!(f, "Storage error: {}", detail),
            AppError::BadInput(msg) => write!(f, "Bad input: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Internal(_) => 1,
            AppError::BadInput(_) => 2,
            AppError::Validation(_) => 3,
            AppError::NotFound { .. } => 4,
            AppError::Storage { retryable: true, .. } => 75,
            AppError::Storage { .. } => 5,
        }
    }

    /// What the user sees.
    pub fn notice(&self) -> ErrorNotice {
        match self {
            AppError::NotFound { kind, id } => {
                ErrorNotice::not_found(*kind).with_detail(format!("No item with id {id}"))
            }
            AppError::Validation(errors) => ErrorNotice::validation(errors.clone()),
            AppError::Storage { detail, retryable } => {
                let notice = ErrorNotice::storage(detail.clone());
                if *retryable { notice.retryable() } else { notice }
            }
            AppError::BadInput(detail) => {
                ErrorNotice::new("Invalid input").with_detail(detail.clone())
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorNotice::internal_error()
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { kind, id } => AppError::NotFound { kind, id },
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Repo(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        let retryable = err.is_retryable();
        match err {
            RepoError::Store(e) => {
                tracing::error!(retryable, "Store error: {}", e);
                AppError::Storage {
                    detail: e.to_string(),
                    retryable,
                }
            }
            RepoError::Serialization(msg) => {
                tracing::error!("Serialization error: {}", msg);
                AppError::Internal(msg)
            }
        }
    }
}

/// Result type alias for pages.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pressdesk_core::ports::StoreError;

    #[test]
    fn test_quota_maps_to_retryable_storage() {
        let err: AppError = DomainError::Repo(RepoError::Store(StoreError::QuotaExceeded {
            key: "posts".to_string(),
            needed: 10,
            limit: 5,
        }))
        .into();
        assert_eq!(err.exit_code(), 75);
        assert!(err.notice().retryable);
    }

    #[test]
    fn test_not_found_notice() {
        let err = AppError::from(DomainError::NotFound {
            kind: ContentKind::Article,
            id: 9,
        });
        let notice = err.notice();
        assert_eq!(notice.title, "Article not found");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_validation_keeps_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("category", "Please select a category");
        let notice = AppError::Validation(errors).notice();
        assert_eq!(
            notice.fields.get("category").map(String::as_str),
            Some("Please select a category")
        );
    }
}
