//! Page outcomes: what a page shows after an action and where it goes next.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use pressdesk_core::ValidationErrors;
use pressdesk_core::domain::ContentKind;

/// Screens a page can hand control to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    List(ContentKind),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List(kind) => write!(f, "/{}", kind.collection_key()),
        }
    }
}

/// Successful page result.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<Route>,
}

impl<T> PageResponse<T> {
    /// Re-render the current screen with `data`.
    pub fn render(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            navigate_to: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn navigate(mut self, route: Route) -> Self {
        self.navigate_to = Some(route);
        self
    }
}

/// Failure shown to the user, with per-field messages for forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// The same action may succeed if tried again later.
    pub retryable: bool,
}

impl ErrorNotice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            fields: BTreeMap::new(),
            retryable: false,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    // Common notices
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            fields: errors.into_map(),
            ..Self::new("Please fill in all required fields")
        }
    }

    pub fn not_found(kind: ContentKind) -> Self {
        Self::new(format!("{} not found", kind.label()))
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::new("Could not save changes").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new("Something went wrong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Route::List(ContentKind::Post).to_string(), "/posts");
        assert_eq!(Route::List(ContentKind::BlogPost).to_string(), "/blog");
    }

    #[test]
    fn test_validation_notice_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "Title is required");
        let notice = ErrorNotice::validation(errors);
        assert_eq!(notice.title, "Please fill in all required fields");
        assert_eq!(notice.fields.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn test_page_response_serializes_route() {
        let response = PageResponse::render(3)
            .with_message("Post published successfully!")
            .navigate(Route::List(ContentKind::Post));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Post published successfully!");
        assert_eq!(json["data"], 3);
        assert!(json["navigate_to"].is_object());
    }
}
