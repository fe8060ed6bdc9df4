//! Display-ready rows and views built from domain records.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use pressdesk_core::domain::{ContentItem, ContentKind, DashboardMetrics, Status, User};

/// One row of a content table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    pub status: Status,
    pub date: String,
    pub views: String,
}

impl From<&ContentItem> for ItemRow {
    fn from(item: &ContentItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            status: item.status,
            date: format_date(&item.date),
            views: format_count(item.views),
        }
    }
}

/// A rendered list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub kind: ContentKind,
    pub rows: Vec<ItemRow>,
    /// "3 posts", "1 article"
    pub count_label: String,
    /// Set when no row matched, e.g. "No posts found".
    pub empty_message: Option<String>,
}

impl ListView {
    pub fn new(kind: ContentKind, items: &[ContentItem]) -> Self {
        let empty_message = items
            .is_empty()
            .then(|| format!("No {} found", kind.plural()));
        Self {
            kind,
            rows: items.iter().map(ItemRow::from).collect(),
            count_label: kind.count_label(items.len()),
            empty_message,
        }
    }
}

/// Full record for the view screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub kind: ContentKind,
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: Status,
    pub date: String,
    pub views: String,
    pub seo_title: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub has_image: bool,
}

impl ItemDetail {
    pub fn new(kind: ContentKind, item: &ContentItem) -> Self {
        Self {
            kind,
            id: item.id,
            title: item.title.clone(),
            content: item.content.clone(),
            status: item.status,
            date: format_date(&item.date),
            views: format_count(item.views),
            seo_title: item.seo_title.clone(),
            category: item.category.clone(),
            tags: item.tag_list().into_iter().map(str::to_string).collect(),
            excerpt: item.excerpt.clone(),
            author: item.author.clone(),
            has_image: item.featured_image.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub initials: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub joined: String,
    pub last_login: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            initials: user.initials(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            status: user.status.to_string(),
            joined: format_date(&user.join_date),
            last_login: format_date(&user.last_login),
        }
    }
}

/// One labelled figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

/// Dashboard cards plus the most viewed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub cards: Vec<MetricCard>,
    pub top_items: Vec<(String, String)>,
}

impl From<&DashboardMetrics> for DashboardView {
    fn from(metrics: &DashboardMetrics) -> Self {
        let card = |title: &str, value: String, description: &str| MetricCard {
            title: title.to_string(),
            value,
            description: description.to_string(),
        };

        let mut cards = vec![
            card("Total Items", format_count(metrics.total_items as u64), "All content"),
            card("Published", format_count(metrics.published as u64), "Live content"),
            card("Drafts", format_count(metrics.drafts as u64), "Not yet published"),
            card("Total Views", format_count(metrics.total_views), "Across all content"),
            card("Total Users", format_count(metrics.total_users as u64), "Registered users"),
        ];
        cards.extend(metrics.per_kind.iter().map(|totals| MetricCard {
            title: capitalize(totals.kind.plural()),
            value: format_count(totals.total as u64),
            description: format!("{} published", format_count(totals.published as u64)),
        }));

        Self {
            cards,
            top_items: metrics
                .top_items
                .iter()
                .map(|top| (top.title.clone(), format_count(top.views)))
                .collect(),
        }
    }
}

/// `"2026-02-01"` or an RFC 3339 timestamp as `"Feb 1, 2026"`.
/// Anything unparseable is shown as stored.
pub fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Thousands-grouped integer: `1234` as `"1,234"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
