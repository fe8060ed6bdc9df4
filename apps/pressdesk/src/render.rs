//! Plain-text rendering of page views for the terminal.

use std::fmt::Write;

use serde::Serialize;

use pressdesk_shared::ErrorNotice;
use pressdesk_shared::dto::{DashboardView, ItemDetail, ListView, UserRow};

use crate::error::{AppError, AppResult};

pub fn json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

pub fn list(view: &ListView) -> String {
    let mut out = String::new();
    if let Some(empty) = &view.empty_message {
        let _ = writeln!(out, "{empty}");
        return out;
    }

    let width = view.rows.iter().map(|r| r.title.chars().count()).max().unwrap_or(0).max(5);
    let _ = writeln!(
        out,
        "{:>15}  {:<width$}  {:<9}  {:<12}  {:>7}",
        "ID", "Title", "Status", "Date", "Views"
    );
    for row in &view.rows {
        let _ = writeln!(
            out,
            "{:>15}  {:<width$}  {:<9}  {:<12}  {:>7}",
            row.id, row.title, row.status, row.date, row.views
        );
    }
    let _ = writeln!(out, "{}", view.count_label);
    out
}

pub fn detail(item: &ItemDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} #{}: {}", item.kind.label(), item.id, item.title);
    let _ = writeln!(out, "Status:   {}", item.status);
    let _ = writeln!(out, "Date:     {}", item.date);
    let _ = writeln!(out, "Views:    {}", item.views);

    let optional = [
        ("SEO:", item.seo_title.as_deref()),
        ("Category:", item.category.as_deref()),
        ("Author:", item.author.as_deref()),
        ("Excerpt:", item.excerpt.as_deref()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            let _ = writeln!(out, "{label:<10}{value}");
        }
    }
    if !item.tags.is_empty() {
        let _ = writeln!(out, "Tags:     {}", item.tags.join(", "));
    }
    if item.has_image {
        let _ = writeln!(out, "Image:    attached");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", item.content);
    out
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    for card in &view.cards {
        let _ = writeln!(out, "{:<14}{:>8}  {}", card.title, card.value, card.description);
    }
    if !view.top_items.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Most viewed");
        for (rank, (title, views)) in view.top_items.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {title} ({views} views)", rank + 1);
        }
    }
    out
}

pub fn users(rows: &[UserRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        let _ = writeln!(out, "No users found");
        return out;
    }
    for row in rows {
        let _ = writeln!(
            out,
            "[{}] {:<16} {:<22} {:<10} {:<10} joined {}, last login {}",
            row.initials, row.name, row.email, row.role, row.status, row.joined, row.last_login
        );
    }
    out
}

pub fn notice(notice: &ErrorNotice) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "error: {}", notice.title);
    if let Some(detail) = &notice.detail {
        let _ = writeln!(out, "  {detail}");
    }
    for (field, message) in &notice.fields {
        let _ = writeln!(out, "  {field}: {message}");
    }
    if notice.retryable {
        let _ = writeln!(out, "  The change was not saved. Try again.");
    }
    out
}
