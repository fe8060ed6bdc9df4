//! Command line surface.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{Args, Parser, Subcommand};

use pressdesk_core::domain::{ItemDraft, ItemId, ItemPatch, RoleFilter, Status, StatusFilter};

use crate::error::{AppError, AppResult};

#[derive(Parser, Debug)]
#[command(name = "pressdesk")]
#[command(author, version, about = "Manage posts, articles and blog entries from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging for pressdesk crates
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage posts
    Posts {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Manage articles
    Articles {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Manage blog entries
    Blog {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Show totals and the most viewed items
    Dashboard,
    /// List users
    Users {
        /// Match against name or email
        #[arg(short, long, default_value = "")]
        query: String,
        /// Admin, Editor, Moderator, User or "All Roles"
        #[arg(short, long, default_value = "all")]
        role: RoleFilter,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContentAction {
    /// List items, optionally filtered
    List {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        query: String,
        /// Draft, Published or "All Status"
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show one item
    Show { id: ItemId },
    /// Create an item (saved as draft unless --publish)
    Create {
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long)]
        publish: bool,
    },
    /// Edit an item; only the given fields change
    Update {
        id: ItemId,
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long, conflicts_with = "draft")]
        publish: bool,
        /// Move back to draft
        #[arg(long)]
        draft: bool,
        /// Remove the featured image
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
    },
    /// Delete an item after confirmation
    Delete {
        id: ItemId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Form fields shared by create and update.
#[derive(Args, Debug, Default)]
pub struct ItemFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub seo_title: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Comma-separated
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub excerpt: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    /// Featured image file, stored inline as a data URL
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl ItemFields {
    pub fn to_draft(&self, publish: bool) -> AppResult<ItemDraft> {
        let status = if publish { Status::Published } else { Status::Draft };
        Ok(ItemDraft {
            title: self.title.clone().unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            status,
            seo_title: self.seo_title.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            featured_image: self.image.as_deref().map(image_data_url).transpose()?,
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
        })
    }

    pub fn to_patch(&self, status: Option<Status>, clear_image: bool) -> AppResult<ItemPatch> {
        let featured_image = if clear_image {
            Some(None)
        } else {
            self.image.as_deref().map(image_data_url).transpose()?.map(Some)
        };

        Ok(ItemPatch {
            title: self.title.clone(),
            content: self.content.clone(),
            status,
            seo_title: self.seo_title.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            featured_image,
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
            date: None,
            views: None,
        })
    }
}

/// Read an image file into a `data:<mime>;base64,...` URL.
pub fn image_data_url(path: &Path) -> AppResult<String> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(AppError::BadInput(format!(
            "{} is not an image ({mime})",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| AppError::BadInput(format!("Cannot read {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Encoded featured image");
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from(["pressdesk", "posts", "list", "-q", "react", "-s", "Published"]);
        let Command::Posts {
            action: ContentAction::List { query, status },
        } = cli.command
        else {
            panic!("expected posts list");
        };
        assert_eq!(query, "react");
        assert_eq!(status, StatusFilter::Only(Status::Published));
    }

    #[test]
    fn test_parse_list_defaults_to_all_status() {
        let cli = Cli::parse_from(["pressdesk", "blog", "list", "--json"]);
        assert!(cli.json);
        let Command::Blog {
            action: ContentAction::List { status, .. },
        } = cli.command
        else {
            panic!("expected blog list");
        };
        assert_eq!(status, StatusFilter::All);
    }

    #[test]
    fn test_update_publish_conflicts_with_draft() {
        let result =
            Cli::try_parse_from(["pressdesk", "articles", "update", "1", "--publish", "--draft"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_from_fields() {
        let fields = ItemFields {
            title: Some("Hello".to_string()),
            category: Some("Design".to_string()),
            ..Default::default()
        };
        let draft = fields.to_draft(true).unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "");
        assert_eq!(draft.status, Status::Published);
        assert_eq!(draft.featured_image, None);
    }

    #[test]
    fn test_patch_only_carries_given_fields() {
        let fields = ItemFields {
            excerpt: Some("Short".to_string()),
            ..Default::default()
        };
        let patch = fields.to_patch(None, true).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.excerpt.as_deref(), Some("Short"));
        assert_eq!(patch.featured_image, Some(None));
    }

    #[test]
    fn test_image_data_url() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();

        let url = image_data_url(file.path()).unwrap();
        assert_eq!(url, "data:image/png;base64,cG5n");
    }

    #[test]
    fn test_image_rejects_non_images() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            image_data_url(file.path()),
            Err(AppError::BadInput(_))
        ));
    }
}
