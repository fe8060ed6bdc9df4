use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pressdesk_core::domain::{
    ContentItem, ContentKind, InsertPosition, ItemDraft, ItemId, ItemPatch, rules,
};
use pressdesk_core::error::{DomainError, RepoError};
use pressdesk_core::ports::{Clock, CollectionRepository, IdGenerator, KeyValueStore};

use super::seed;

/// Generic collection repository: one JSON array per kind, stored under the
/// kind's collection key.
///
/// Mutations inside one process are serialized by `write_lock`. Separate
/// processes sharing a store are last-writer-wins.
pub struct LocalCollectionRepository<S: ?Sized = dyn KeyValueStore> {
    kind: ContentKind,
    store: Arc<S>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    seed: Vec<ContentItem>,
    write_lock: Mutex<()>,
}

impl<S> LocalCollectionRepository<S>
where
    S: KeyValueStore + ?Sized + 'static,
{
    pub fn new(
        kind: ContentKind,
        store: Arc<S>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            store,
            ids,
            clock,
            seed: seed::default_items(kind),
            write_lock: Mutex::new(()),
        }
    }

    /// Replace the default seed written when the collection is absent.
    pub fn with_seed(mut self, seed: Vec<ContentItem>) -> Self {
        self.seed = seed;
        self
    }

    fn key(&self) -> &'static str {
        self.kind.collection_key()
    }

    /// Read without locking. Absent collections are seeded; unreadable ones
    /// degrade to empty.
    async fn read(&self) -> Result<Vec<ContentItem>, RepoError> {
        let Some(raw) = self.store.get(self.key()).await? else {
            self.persist(&self.seed).await?;
            tracing::info!(collection = %self.key(), items = self.seed.len(), "Seeded collection");
            return Ok(self.seed.clone());
        };

        match serde_json::from_str::<Vec<ContentItem>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    collection = %self.key(),
                    error = %e,
                    "Stored collection is unreadable, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, items: &[ContentItem]) -> Result<(), RepoError> {
        let raw =
            serde_json::to_string(items).map_err(|e| RepoError::Serialization(e.to_string()))?;
        self.store.set(self.key(), &raw).await.map_err(|e| {
            tracing::error!(collection = %self.key(), error = %e, "Failed to persist collection");
            RepoError::from(e)
        })
    }

    /// Generated id, bumped past the collection's maximum if already taken.
    fn assign_id(&self, items: &[ContentItem]) -> ItemId {
        let candidate = self.ids.next_id();
        if !items.iter().any(|item| item.id == candidate) {
            return candidate;
        }
        let max = items.iter().map(|item| item.id).max().unwrap_or(candidate);
        let bumped = max
            .max(candidate)
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(items));
        tracing::debug!(collection = %self.key(), candidate, bumped, "Generated id collided");
        bumped
    }
}

/// Smallest positive id not used in `items`.
fn lowest_free_id(items: &[ContentItem]) -> ItemId {
    let mut taken: Vec<ItemId> = items.iter().map(|item| item.id).filter(|id| *id > 0).collect();
    taken.sort_unstable();
    taken.dedup();
    let mut next = 1;
    for id in taken {
        if id != next {
            break;
        }
        next += 1;
    }
    next
}

#[async_trait]
impl<S> CollectionRepository for LocalCollectionRepository<S>
where
    S: KeyValueStore + ?Sized + 'static,
{
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn load(&self) -> Result<Vec<ContentItem>, RepoError> {
        let _guard = self.write_lock.lock().await;
        self.read().await
    }

    async fn create(&self, draft: ItemDraft) -> Result<ContentItem, DomainError> {
        let mut draft = draft;
        if draft.author.is_none() {
            draft.author = self.kind.default_author().map(str::to_string);
        }
        let date = self.clock.today().format("%Y-%m-%d").to_string();
        let mut item = draft.into_item(0, date);

        // Nothing touches the store until the draft is valid.
        rules::validate(self.kind, &item).map_err(DomainError::Validation)?;

        let _guard = self.write_lock.lock().await;
        let mut items = self.read().await?;
        item.id = self.assign_id(&items);

        match self.kind.insert_position() {
            InsertPosition::Front => items.insert(0, item.clone()),
            InsertPosition::Back => items.push(item.clone()),
        }
        self.persist(&items).await?;

        tracing::info!(
            collection = %self.key(),
            id = item.id,
            status = %item.status,
            "Created item"
        );
        Ok(item)
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<ContentItem, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read().await?;

        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(DomainError::NotFound {
                kind: self.kind,
                id,
            })?;

        if patch.is_empty() {
            tracing::debug!(collection = %self.key(), id, "Empty patch, nothing to store");
            return Ok(items.swap_remove(position));
        }

        let mut merged = items[position].clone();
        patch.clone().apply(&mut merged);
        rules::validate_patch(self.kind, &patch, &merged).map_err(DomainError::Validation)?;

        items[position] = merged.clone();
        self.persist(&items).await?;

        tracing::info!(collection = %self.key(), id, "Updated item");
        Ok(merged)
    }

    async fn remove(&self, id: ItemId) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read().await?;

        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            tracing::debug!(collection = %self.key(), id, "Remove of missing item ignored");
            return Ok(());
        }

        self.persist(&items).await?;
        tracing::info!(collection = %self.key(), id, "Removed item");
        Ok(())
    }
}
