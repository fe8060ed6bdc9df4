//! Declarative per-kind validation table, shared by create and update.

use super::draft::ItemPatch;
use super::item::{ContentItem, ContentKind};
use crate::error::ValidationErrors;

/// Largest accepted featured image, measured on the decoded payload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A validated field, keyed by its persisted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    SeoTitle,
    Content,
    Category,
    FeaturedImage,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::SeoTitle => "seoTitle",
            Field::Content => "content",
            Field::Category => "category",
            Field::FeaturedImage => "featuredImage",
        }
    }

    fn value<'a>(&self, item: &'a ContentItem) -> Option<&'a str> {
        match self {
            Field::Title => Some(item.title.as_str()),
            Field::SeoTitle => item.seo_title.as_deref(),
            Field::Content => Some(item.content.as_str()),
            Field::Category => item.category.as_deref(),
            Field::FeaturedImage => item.featured_image.as_deref(),
        }
    }

    fn set_by(&self, patch: &ItemPatch) -> bool {
        match self {
            Field::Title => patch.title.is_some(),
            Field::SeoTitle => patch.seo_title.is_some(),
            Field::Content => patch.content.is_some(),
            Field::Category => patch.category.is_some(),
            Field::FeaturedImage => patch.featured_image.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not blank after trimming.
    Required,
    /// Present and non-empty (a select box choice).
    Selected,
    /// Absent, or a data URL whose decoded payload fits the limit.
    MaxDataUrlBytes(usize),
}

impl Rule {
    fn check(&self, value: Option<&str>) -> bool {
        match self {
            Rule::Required => value.is_some_and(|v| !v.trim().is_empty()),
            Rule::Selected => value.is_some_and(|v| !v.is_empty()),
            Rule::MaxDataUrlBytes(limit) => value.is_none_or(|v| data_url_payload_len(v) <= *limit),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

const TITLE: FieldRule = FieldRule {
    field: Field::Title,
    rule: Rule::Required,
    message: "Title is required",
};

const SEO_TITLE: FieldRule = FieldRule {
    field: Field::SeoTitle,
    rule: Rule::Required,
    message: "SEO Title is required",
};

const CONTENT: FieldRule = FieldRule {
    field: Field::Content,
    rule: Rule::Required,
    message: "Content is required",
};

const CATEGORY: FieldRule = FieldRule {
    field: Field::Category,
    rule: Rule::Selected,
    message: "Please select a category",
};

const IMAGE: FieldRule = FieldRule {
    field: Field::FeaturedImage,
    rule: Rule::MaxDataUrlBytes(MAX_IMAGE_BYTES),
    message: "Image size must be less than 5MB",
};

const POST_RULES: &[FieldRule] = &[TITLE, CONTENT, CATEGORY, IMAGE];
const ARTICLE_RULES: &[FieldRule] = &[TITLE, SEO_TITLE, CONTENT, IMAGE];
const BLOG_RULES: &[FieldRule] = &[TITLE, CONTENT, IMAGE];

pub fn rules_for(kind: ContentKind) -> &'static [FieldRule] {
    match kind {
        ContentKind::Post => POST_RULES,
        ContentKind::Article => ARTICLE_RULES,
        ContentKind::BlogPost => BLOG_RULES,
    }
}

/// Run every rule for `kind` against `item`, collecting one message per field.
pub fn validate(kind: ContentKind, item: &ContentItem) -> Result<(), ValidationErrors> {
    check(rules_for(kind).iter(), item)
}

/// Validate an edit: only the fields `patch` sets are checked, against their
/// merged values. Stored rows missing optional-in-storage fields stay editable.
pub fn validate_patch(
    kind: ContentKind,
    patch: &ItemPatch,
    merged: &ContentItem,
) -> Result<(), ValidationErrors> {
    check(rules_for(kind).iter().filter(|rule| rule.field.set_by(patch)), merged)
}

fn check<'a>(
    rules: impl Iterator<Item = &'a FieldRule>,
    item: &ContentItem,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        if !rule.rule.check(rule.field.value(item)) {
            errors.add(rule.field.key(), rule.message);
        }
    }
    errors.into_result()
}

/// Decoded size of a data URL payload. Plain strings count as raw bytes.
fn data_url_payload_len(url: &str) -> usize {
    let Some((header, payload)) = url.split_once(',') else {
        return url.len();
    };
    if !header.ends_with(";base64") {
        return payload.len();
    }
    let payload = payload.trim_end();
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() / 4 * 3 + (payload.len() % 4) * 3 / 4).saturating_sub(padding)
}
