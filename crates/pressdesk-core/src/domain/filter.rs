use std::fmt;
use std::str::FromStr;

use super::item::{ContentItem, Status};
use crate::error::ParseError;

/// Sentinel status filter value that matches every item.
pub const ALL_STATUS: &str = "All Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL_STATUS),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_STATUS) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        trimmed
            .parse::<Status>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseError::new("status filter", s))
    }
}

/// Search text plus status filter, as held by a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }

    /// Case-insensitive title substring match combined with the status filter.
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.status.matches(item.status)
            && item
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// Filtered, order-preserving view of `items`.
pub fn list(items: &[ContentItem], query: &str, status: StatusFilter) -> Vec<ContentItem> {
    ListQuery::new(query, status).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<ContentItem> {
        vec![
            ContentItem::new(1, "A", Status::Published, "2026-02-01"),
            ContentItem::new(2, "B", Status::Draft, "2026-02-02"),
        ]
    }

    fn catalog() -> Vec<ContentItem> {
        vec![
            ContentItem::new(1, "Getting Started with React", Status::Published, "2026-02-01"),
            ContentItem::new(2, "Tailwind CSS Guide", Status::Published, "2026-02-02"),
            ContentItem::new(3, "TypeScript Tips", Status::Draft, "2026-02-03"),
            ContentItem::new(4, "React Hooks in Depth", Status::Draft, "2026-02-04"),
        ]
    }

    fn ids(items: &[ContentItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_unfiltered_list_is_identity() {
        let items = catalog();
        assert_eq!(list(&items, "", StatusFilter::All), items);
    }

    #[test]
    fn test_draft_filter_on_seed() {
        let result = list(&seed(), "", "Draft".parse().unwrap());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let result = list(&seed(), "a", ALL_STATUS.parse().unwrap());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_query_results_are_subset_of_status_results() {
        let items = catalog();
        for status in [StatusFilter::All, Status::Draft.into(), Status::Published.into()] {
            let base = list(&items, "", status);
            for query in ["react", "T", "guide", "zzz", ""] {
                let narrowed = list(&items, query, status);
                assert!(narrowed.iter().all(|item| base.contains(item)));
                assert!(
                    narrowed
                        .iter()
                        .all(|item| item.title.to_lowercase().contains(&query.to_lowercase()))
                );
            }
        }
    }

    #[test]
    fn test_preserves_order() {
        let result = list(&catalog(), "react", StatusFilter::All);
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_filter_round_trips_through_display() {
        assert_eq!(StatusFilter::All.to_string(), "All Status");
        assert_eq!("Published".parse::<StatusFilter>().unwrap(), Status::Published.into());
        assert!("Archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_is_unfiltered() {
        assert!(ListQuery::default().is_unfiltered());
        assert!(!ListQuery::new("x", StatusFilter::All).is_unfiltered());
    }
}
