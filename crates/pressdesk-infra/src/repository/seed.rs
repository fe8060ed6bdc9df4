//! Default collections written the first time a collection is loaded.

use pressdesk_core::domain::{AccountStatus, ContentItem, ContentKind, Role, Status, User};

/// Seed set for `kind`.
pub fn default_items(kind: ContentKind) -> Vec<ContentItem> {
    match kind {
        ContentKind::Post => posts(),
        ContentKind::Article => articles(),
        ContentKind::BlogPost => blog_posts(),
    }
}

struct Row {
    id: i64,
    title: &'static str,
    content: &'static str,
    status: Status,
    date: &'static str,
    views: u64,
}

impl Row {
    fn build(self) -> ContentItem {
        let mut item = ContentItem::new(self.id, self.title, self.status, self.date);
        item.content = self.content.to_string();
        item.views = self.views;
        item
    }
}

fn with_details(
    mut item: ContentItem,
    category: &str,
    tags: &str,
    excerpt: &str,
    author: Option<&str>,
) -> ContentItem {
    item.category = Some(category.to_string());
    item.tags = Some(tags.to_string());
    item.excerpt = Some(excerpt.to_string());
    item.author = author.map(str::to_string);
    item
}

fn posts() -> Vec<ContentItem> {
    vec![
        with_details(
            Row {
                id: 1,
                title: "Getting Started with React",
                content: "React is a powerful JavaScript library for building user interfaces...",
                status: Status::Published,
                date: "2026-02-01",
                views: 342,
            }
            .build(),
            "Technology",
            "React, JavaScript, Tutorial",
            "Learn the basics of React in this beginner-friendly tutorial.",
            Some("Admin"),
        ),
        with_details(
            Row {
                id: 2,
                title: "Tailwind CSS Guide",
                content: "Tailwind CSS is a utility-first CSS framework...",
                status: Status::Published,
                date: "2026-02-02",
                views: 156,
            }
            .build(),
            "Design",
            "CSS, Tailwind, Design",
            "A complete guide to styling with Tailwind CSS.",
            Some("Admin"),
        ),
        with_details(
            Row {
                id: 3,
                title: "TypeScript Tips",
                content: "TypeScript is a typed superset of JavaScript...",
                status: Status::Draft,
                date: "2026-02-03",
                views: 0,
            }
            .build(),
            "Development",
            "TypeScript, JavaScript",
            "Improve your TypeScript skills with these tips.",
            Some("Admin"),
        ),
    ]
}

fn articles() -> Vec<ContentItem> {
    [
        (
            Row {
                id: 1,
                title: "Technical Documentation",
                content: "Comprehensive technical documentation for developers.",
                status: Status::Published,
                date: "2026-01-28",
                views: 523,
            },
            "Technical Docs",
        ),
        (
            Row {
                id: 2,
                title: "Best Practices Guide",
                content: "Learn the best practices for modern web development.",
                status: Status::Published,
                date: "2026-01-25",
                views: 412,
            },
            "Best Practices",
        ),
        (
            Row {
                id: 3,
                title: "API Reference Guide",
                content: "Complete API reference documentation.",
                status: Status::Draft,
                date: "2026-01-20",
                views: 0,
            },
            "API Reference",
        ),
    ]
    .into_iter()
    .map(|(row, seo_title)| {
        let mut item = row.build();
        item.seo_title = Some(seo_title.to_string());
        item
    })
    .collect()
}

fn blog_posts() -> Vec<ContentItem> {
    vec![
        with_details(
            Row {
                id: 1,
                title: "January Newsletter",
                content: "Welcome to our January newsletter...",
                status: Status::Published,
                date: "2026-01-30",
                views: 234,
            }
            .build(),
            "Newsletter",
            "newsletter, january",
            "Monthly updates and news",
            None,
        ),
        with_details(
            Row {
                id: 2,
                title: "Product Updates",
                content: "Exciting new features coming soon...",
                status: Status::Published,
                date: "2026-01-20",
                views: 189,
            }
            .build(),
            "Updates",
            "product, updates",
            "Latest product improvements",
            None,
        ),
        with_details(
            Row {
                id: 3,
                title: "Company Announcement",
                content: "Important company news...",
                status: Status::Draft,
                date: "2026-01-10",
                views: 0,
            }
            .build(),
            "News",
            "company, news",
            "Major company updates",
            None,
        ),
    ]
}

/// The read-only user directory.
pub fn users() -> Vec<User> {
    [
        (1, "John Admin", "john@example.com", Role::Admin, "2025-01-01", "2026-02-04"),
        (2, "Jane Editor", "jane@example.com", Role::Editor, "2025-06-15", "2026-02-03"),
        (3, "Bob Moderator", "bob@example.com", Role::Moderator, "2025-08-20", "2026-02-02"),
    ]
    .into_iter()
    .map(|(id, name, email, role, join_date, last_login)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status: AccountStatus::Active,
        join_date: join_date.to_string(),
        last_login: last_login.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressdesk_core::domain::rules;

    #[test]
    fn test_seeds_pass_their_own_rules() {
        for kind in ContentKind::ALL {
            for item in default_items(kind) {
                assert!(rules::validate(kind, &item).is_ok(), "{kind} seed {} invalid", item.id);
            }
        }
    }

    #[test]
    fn test_seed_ids_unique() {
        for kind in ContentKind::ALL {
            let mut ids: Vec<i64> = default_items(kind).iter().map(|i| i.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), 3);
        }
    }
}
