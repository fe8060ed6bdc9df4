//! Domain entities - content items, users and the rules that govern them.

mod draft;
mod filter;
mod item;
mod metrics;
pub mod rules;
mod user;

pub use draft::{ItemDraft, ItemPatch};
pub use filter::{ALL_STATUS, ListQuery, StatusFilter, list};
pub use item::{ContentItem, ContentKind, InsertPosition, ItemId, Status};
pub use metrics::{DashboardMetrics, KindTotals, TopItem};
pub use user::{ALL_ROLES, AccountStatus, Role, RoleFilter, User, UserQuery};
