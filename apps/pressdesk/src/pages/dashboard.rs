use pressdesk_core::domain::{ContentKind, DashboardMetrics};
use pressdesk_shared::dto::DashboardView;

use crate::error::AppResult;
use crate::state::AppState;

/// Load every collection and summarize it for the dashboard.
pub async fn dashboard(state: &AppState) -> AppResult<DashboardView> {
    let mut collections = Vec::with_capacity(ContentKind::ALL.len());
    for kind in ContentKind::ALL {
        let items = state.repository(kind).load().await?;
        collections.push((kind, items));
    }

    let metrics = DashboardMetrics::compute(&collections, &state.users);
    tracing::debug!(
        total_items = metrics.total_items,
        total_views = metrics.total_views,
        "Dashboard metrics computed"
    );
    Ok(DashboardView::from(&metrics))
}
