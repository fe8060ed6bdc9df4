//! Page controllers - the behavior behind each dashboard screen.

mod content;
mod dashboard;
mod users;

pub use content::{Confirm, ContentListPage, EditorPage};
pub use dashboard::dashboard;
pub use users::users;
