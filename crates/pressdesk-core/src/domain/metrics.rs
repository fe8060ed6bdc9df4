use serde::Serialize;

use super::item::{ContentItem, ContentKind};
use super::user::User;

/// Per-collection counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    pub kind: ContentKind,
    pub total: usize,
    pub published: usize,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub kind: ContentKind,
    pub id: i64,
    pub title: String,
    pub views: u64,
}

/// Figures derived from the collections and the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_items: usize,
    pub published: usize,
    pub drafts: usize,
    pub total_views: u64,
    pub total_users: usize,
    pub per_kind: Vec<KindTotals>,
    pub top_items: Vec<TopItem>,
}

impl DashboardMetrics {
    pub const TOP_ITEMS: usize = 5;

    pub fn compute(collections: &[(ContentKind, Vec<ContentItem>)], users: &[User]) -> Self {
        let per_kind: Vec<KindTotals> = collections
            .iter()
            .map(|(kind, items)| KindTotals {
                kind: *kind,
                total: items.len(),
                published: items.iter().filter(|i| i.is_published()).count(),
                views: items.iter().map(|i| i.views).sum(),
            })
            .collect();

        let mut top_items: Vec<TopItem> = collections
            .iter()
            .flat_map(|(kind, items)| {
                items.iter().map(move |item| TopItem {
                    kind: *kind,
                    id: item.id,
                    title: item.title.clone(),
                    views: item.views,
                })
            })
            .collect();
        // Stable sort keeps collection order among equal view counts.
        top_items.sort_by(|a, b| b.views.cmp(&a.views));
        top_items.truncate(Self::TOP_ITEMS);

        let total_items = per_kind.iter().map(|k| k.total).sum();
        let published = per_kind.iter().map(|k| k.published).sum();

        Self {
            total_items,
            published,
            drafts: total_items - published,
            total_views: per_kind.iter().map(|k| k.views).sum(),
            total_users: users.len(),
            per_kind,
            top_items,
        }
    }
}
