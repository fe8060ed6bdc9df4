use serde::{Deserialize, Serialize};

use super::item::{ContentItem, ItemId, Status};

/// Form data submitted by a create page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Materialize the draft with repository-assigned fields.
    pub fn into_item(self, id: ItemId, date: String) -> ContentItem {
        ContentItem {
            id,
            title: self.title,
            content: self.content,
            status: self.status,
            date,
            views: 0,
            seo_title: self.seo_title,
            category: self.category,
            tags: self.tags,
            featured_image: self.featured_image,
            excerpt: self.excerpt,
            author: self.author,
        }
    }
}

/// Changes submitted by an edit page. `None` leaves a field untouched.
///
/// `date` and `views` are normally left alone; they are only rewritten when
/// a patch sets them explicitly. `featured_image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<Status>,
    pub seo_title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub views: Option<u64>,
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `item`. The id is never touched.
    pub fn apply(self, item: &mut ContentItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(content) = self.content {
            item.content = content;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(seo_title) = self.seo_title {
            item.seo_title = Some(seo_title);
        }
        if let Some(category) = self.category {
            item.category = Some(category);
        }
        if let Some(tags) = self.tags {
            item.tags = Some(tags);
        }
        if let Some(image) = self.featured_image {
            item.featured_image = image;
        }
        if let Some(excerpt) = self.excerpt {
            item.excerpt = Some(excerpt);
        }
        if let Some(author) = self.author {
            item.author = Some(author);
        }
        if let Some(date) = self.date {
            item.date = date;
        }
        if let Some(views) = self.views {
            item.views = views;
        }
    }
}
