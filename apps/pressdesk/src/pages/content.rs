//! Posts, articles and blog pages: list with filters, view, create, edit, delete.

use std::sync::Arc;

use pressdesk_core::domain::{
    ContentItem, ContentKind, ItemDraft, ItemId, ItemPatch, ListQuery, Status, StatusFilter,
};
use pressdesk_core::ports::CollectionRepository;
use pressdesk_shared::dto::{ItemDetail, ListView};
use pressdesk_shared::{PageResponse, Route};

use crate::error::{AppError, AppResult};

/// Asks the user before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

pub fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{title}\"? This action cannot be undone.")
}

/// A content list screen holding its search text and status filter.
pub struct ContentListPage {
    repo: Arc<dyn CollectionRepository>,
    query: ListQuery,
}

impl ContentListPage {
    pub fn new(repo: Arc<dyn CollectionRepository>) -> Self {
        Self {
            repo,
            query: ListQuery::default(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.repo.kind()
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn filter_status(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    /// Back to an empty search and "All Status".
    pub fn clear_filters(&mut self) {
        self.query = ListQuery::default();
    }

    pub async fn render(&self) -> AppResult<ListView> {
        let items = self.repo.list(&self.query).await?;
        Ok(ListView::new(self.kind(), &items))
    }

    /// Delete after confirmation and re-render the list.
    ///
    /// A row that no longer exists, or a declined prompt, just re-renders.
    pub async fn delete(
        &self,
        id: ItemId,
        confirm: &dyn Confirm,
    ) -> AppResult<PageResponse<ListView>> {
        let Some(item) = self.repo.find_by_id(id).await? else {
            tracing::debug!(kind = %self.kind(), id, "Delete requested for missing item");
            return Ok(PageResponse::render(self.render().await?));
        };

        if !confirm.confirm(&delete_prompt(&item.title)) {
            tracing::debug!(kind = %self.kind(), id, "Delete cancelled");
            return Ok(PageResponse::render(self.render().await?));
        }

        self.repo.remove(id).await?;
        Ok(PageResponse::render(self.render().await?)
            .with_message(format!("Deleted \"{}\"", item.title)))
    }
}

/// Create, edit and view screens for one kind.
pub struct EditorPage {
    repo: Arc<dyn CollectionRepository>,
}

impl EditorPage {
    pub fn new(repo: Arc<dyn CollectionRepository>) -> Self {
        Self { repo }
    }

    fn kind(&self) -> ContentKind {
        self.repo.kind()
    }

    pub async fn create(&self, draft: ItemDraft) -> AppResult<PageResponse<ItemDetail>> {
        let kind = self.kind();
        let verb = match draft.status {
            Status::Draft => "saved as draft",
            Status::Published => "published",
        };

        let item = self.repo.create(draft).await?;

        Ok(PageResponse::render(ItemDetail::new(kind, &item))
            .with_message(format!("{} {verb} successfully!", kind.label()))
            .navigate(Route::List(kind)))
    }

    /// Load an item into the edit form.
    pub async fn open(&self, id: ItemId) -> AppResult<ContentItem> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound {
                kind: self.kind(),
                id,
            })
    }

    pub async fn view(&self, id: ItemId) -> AppResult<ItemDetail> {
        let item = self.open(id).await?;
        Ok(ItemDetail::new(self.kind(), &item))
    }

    pub async fn save(&self, id: ItemId, patch: ItemPatch) -> AppResult<PageResponse<ItemDetail>> {
        let kind = self.kind();
        let item = self.repo.update(id, patch).await?;

        Ok(PageResponse::render(ItemDetail::new(kind, &item))
            .with_message(format!("{} updated successfully", kind.label()))
            .navigate(Route::List(kind)))
    }
}
