use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Identifier of an item within its collection.
pub type ItemId = i64;

/// Publication status. No transition order is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Draft,
    Published,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Published => "Published",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Status::Draft),
            "published" => Ok(Status::Published),
            _ => Err(ParseError::new("status", s)),
        }
    }
}

/// Where a kind places newly created items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// The three independent content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Post,
    Article,
    BlogPost,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Post,
        ContentKind::Article,
        ContentKind::BlogPost,
    ];

    /// Store key holding this kind's collection.
    pub fn collection_key(&self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Article => "articles",
            ContentKind::BlogPost => "blog",
        }
    }

    pub fn insert_position(&self) -> InsertPosition {
        match self {
            ContentKind::Post | ContentKind::BlogPost => InsertPosition::Front,
            ContentKind::Article => InsertPosition::Back,
        }
    }

    /// Lowercase noun used in counts and notices ("post", "blog post").
    pub fn singular(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Article => "article",
            ContentKind::BlogPost => "blog post",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Article => "articles",
            ContentKind::BlogPost => "blog posts",
        }
    }

    /// `"1 post"`, `"3 posts"`, `"0 articles"`.
    pub fn count_label(&self, count: usize) -> String {
        let noun = if count == 1 { self.singular() } else { self.plural() };
        format!("{count} {noun}")
    }

    /// Capitalized name used in headings and errors.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Post => "Post",
            ContentKind::Article => "Article",
            ContentKind::BlogPost => "Blog post",
        }
    }

    /// Default author stamped on new items that do not name one.
    pub fn default_author(&self) -> Option<&'static str> {
        match self {
            ContentKind::Post => Some("Admin"),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" | "posts" => Ok(ContentKind::Post),
            "article" | "articles" => Ok(ContentKind::Article),
            "blog" | "blogs" | "blog post" | "blogpost" => Ok(ContentKind::BlogPost),
            _ => Err(ParseError::new("content kind", s)),
        }
    }
}

/// A post, article or blog entry as persisted in its collection.
///
/// Field names serialize in camelCase so collections written by the
/// dashboard pages load unchanged. Older posts collections carry rows without
/// `content`, so missing text fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ContentItem {
    /// Bare item with only the always-present fields set.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        status: Status,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            status,
            date: date.into(),
            views: 0,
            seo_title: None,
            category: None,
            tags: None,
            featured_image: None,
            excerpt: None,
            author: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    /// Tags split on commas, trimmed, blanks dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
