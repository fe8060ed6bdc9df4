use pressdesk_core::domain::UserQuery;
use pressdesk_shared::dto::UserRow;

use crate::state::AppState;

/// Users matching `query`, in directory order.
pub fn users(state: &AppState, query: &UserQuery) -> Vec<UserRow> {
    query.apply(&state.users).iter().map(UserRow::from).collect()
}
