use async_trait::async_trait;

use crate::domain::{ContentItem, ContentKind, ItemDraft, ItemId, ItemPatch, ListQuery};
use crate::error::{DomainError, RepoError};

/// One content collection: load, list and single-item CRUD.
///
/// Every mutation is a full read-modify-write of the collection.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Kind of items this repository holds.
    fn kind(&self) -> ContentKind;

    /// Read the whole collection, seeding it first if the store has none.
    async fn load(&self) -> Result<Vec<ContentItem>, RepoError>;

    /// Filtered view of the collection.
    async fn list(&self, query: &ListQuery) -> Result<Vec<ContentItem>, RepoError> {
        let items = self.load().await?;
        Ok(query.apply(&items))
    }

    /// Find an item by its id.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<ContentItem>, RepoError> {
        let items = self.load().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    /// Validate and store a new item.
    async fn create(&self, draft: ItemDraft) -> Result<ContentItem, DomainError>;

    /// Merge `patch` into the item with `id`, validate and store it.
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<ContentItem, DomainError>;

    /// Remove the item with `id`. Missing ids are a no-op.
    async fn remove(&self, id: ItemId) -> Result<(), RepoError>;
}
