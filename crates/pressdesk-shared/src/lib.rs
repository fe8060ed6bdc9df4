//! # Pressdesk Shared
//!
//! View models shared by every front end: table rows, list views, detail
//! views, and the notices a page shows after an action.

pub mod dto;
pub mod response;

pub use response::{ErrorNotice, PageResponse, Route};
