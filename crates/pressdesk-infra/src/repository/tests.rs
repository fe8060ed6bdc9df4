use std::sync::Arc;

use chrono::NaiveDate;

use pressdesk_core::domain::{
    ContentItem, ContentKind, ItemDraft, ItemPatch, ListQuery, Status, StatusFilter,
};
use pressdesk_core::error::{DomainError, RepoError};
use pressdesk_core::ports::{Clock, CollectionRepository, IdGenerator, KeyValueStore, StoreError};

use crate::clock::{FixedClock, MonotonicIdGenerator, TimestampIdGenerator};
use crate::repository::LocalCollectionRepository;
use crate::store::InMemoryStore;

const NOW_MILLIS: i64 = 1_760_745_600_000;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(
        NOW_MILLIS,
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
    ))
}

fn repo(kind: ContentKind, store: Arc<InMemoryStore>) -> LocalCollectionRepository<InMemoryStore> {
    let clock = clock();
    let ids: Arc<dyn IdGenerator> = Arc::new(MonotonicIdGenerator::new(clock.clone()));
    LocalCollectionRepository::new(kind, store, ids, clock)
}

fn two_item_seed() -> Vec<ContentItem> {
    vec![
        ContentItem::new(1, "A", Status::Published, "2026-02-01"),
        ContentItem::new(2, "B", Status::Draft, "2026-02-02"),
    ]
}

fn post_draft(title: &str, content: &str) -> ItemDraft {
    ItemDraft {
        category: Some("Technology".to_string()),
        ..ItemDraft::new(title, content)
    }
}

async fn stored(store: &InMemoryStore, key: &str) -> Vec<ContentItem> {
    let raw = store.get(key).await.unwrap().expect("collection stored");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn test_load_seeds_absent_collection() {
    let store = Arc::new(InMemoryStore::new());
    let articles = repo(ContentKind::Article, store.clone());

    let items = articles.load().await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Technical Documentation");
    assert_eq!(stored(&store, "articles").await, items);
}

#[tokio::test]
async fn test_load_keeps_existing_collection() {
    let store = Arc::new(InMemoryStore::new());
    store.set("posts", "[]").await.unwrap();

    let posts = repo(ContentKind::Post, store.clone());
    assert!(posts.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreadable_collection_degrades_to_empty() {
    let store = Arc::new(InMemoryStore::new());
    store.set("posts", "{not json").await.unwrap();

    let posts = repo(ContentKind::Post, store.clone());
    assert!(posts.load().await.unwrap().is_empty());
    // Load alone does not overwrite what is there
    assert_eq!(store.get("posts").await.unwrap().as_deref(), Some("{not json"));
}

#[tokio::test]
async fn test_list_on_two_item_seed() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store).with_seed(two_item_seed());

    let drafts = posts
        .list(&ListQuery::new("", Status::Draft.into()))
        .await
        .unwrap();
    assert_eq!(drafts.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);

    let matching = posts
        .list(&ListQuery::new("a", StatusFilter::All))
        .await
        .unwrap();
    assert_eq!(matching.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let store = Arc::new(InMemoryStore::new());
    let blog = repo(ContentKind::BlogPost, store);
    let before = blog.list(&ListQuery::default()).await.unwrap().len();

    let created = blog.create(ItemDraft::new("T", "C")).await.unwrap();
    let after = blog.list(&ListQuery::default()).await.unwrap();

    assert_eq!(after.len(), before + 1);
    let found: Vec<_> = after.iter().filter(|i| i.id == created.id).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "T");
    assert_eq!(found[0].content, "C");
    assert_eq!(found[0].views, 0);
    assert_eq!(found[0].date, "2026-10-18");
    assert_eq!(found[0].status, Status::Draft);
}

#[tokio::test]
async fn test_create_position_depends_on_kind() {
    let store = Arc::new(InMemoryStore::new());

    let posts = repo(ContentKind::Post, store.clone());
    let post = posts.create(post_draft("Newest", "Body")).await.unwrap();
    assert_eq!(posts.load().await.unwrap()[0].id, post.id);
    assert_eq!(post.author.as_deref(), Some("Admin"));

    let articles = repo(ContentKind::Article, store.clone());
    let article = articles
        .create(ItemDraft {
            seo_title: Some("SEO".to_string()),
            ..ItemDraft::new("Appended", "Body")
        })
        .await
        .unwrap();
    assert_eq!(articles.load().await.unwrap().last().unwrap().id, article.id);
    assert_eq!(article.author, None);
}

#[tokio::test]
async fn test_invalid_draft_writes_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let articles = repo(ContentKind::Article, store.clone());

    let err = articles
        .create(ItemDraft::new("Title only", ""))
        .await
        .unwrap_err();

    let DomainError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.get("seoTitle"), Some("SEO Title is required"));
    assert_eq!(errors.get("content"), Some("Content is required"));
    assert!(!store.contains("articles").await, "no seed or write on failure");
}

#[tokio::test]
async fn test_update_then_read_round_trip() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store.clone());
    let original = posts.find_by_id(2).await.unwrap().unwrap();

    let updated = posts.update(2, ItemPatch::title("New Title")).await.unwrap();
    assert_eq!(updated.title, "New Title");

    let reloaded = repo(ContentKind::Post, store)
        .find_by_id(2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.id, 2);
    assert_eq!(reloaded.title, "New Title");
    assert_eq!(reloaded.date, original.date);
    assert_eq!(reloaded.views, original.views);
}

#[tokio::test]
async fn test_update_round_trip_on_bare_rows() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store.clone()).with_seed(two_item_seed());

    let updated = posts.update(2, ItemPatch::title("New Title")).await.unwrap();
    assert_eq!(updated.title, "New Title");

    let reloaded = stored(&store, "posts").await;
    assert_eq!(reloaded[1].id, 2);
    assert_eq!(reloaded[1].title, "New Title");
    assert_eq!(reloaded[1].date, "2026-02-02");
    assert_eq!(reloaded[1].views, 0);
    assert_eq!(reloaded[0].title, "A");
}

#[tokio::test]
async fn test_empty_patch_does_not_write() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store.clone()).with_seed(two_item_seed());
    posts.load().await.unwrap();
    let before = store.get("posts").await.unwrap();

    let item = posts.update(1, ItemPatch::default()).await.unwrap();
    assert_eq!(item.title, "A");
    assert_eq!(store.get("posts").await.unwrap(), before);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store);

    let err = posts.update(99, ItemPatch::title("x")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            kind: ContentKind::Post,
            id: 99
        }
    ));
}

#[tokio::test]
async fn test_update_is_validated() {
    let store = Arc::new(InMemoryStore::new());
    let articles = repo(ContentKind::Article, store.clone());
    articles.load().await.unwrap();
    let before = store.get("articles").await.unwrap();

    let err = articles
        .update(1, ItemPatch::title("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref e) if e.contains("title")));
    assert_eq!(store.get("articles").await.unwrap(), before);
}

#[tokio::test]
async fn test_status_can_move_both_ways() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store);

    let patch = |status| ItemPatch {
        status: Some(status),
        ..Default::default()
    };
    assert_eq!(posts.update(1, patch(Status::Draft)).await.unwrap().status, Status::Draft);
    assert_eq!(
        posts.update(1, patch(Status::Published)).await.unwrap().status,
        Status::Published
    );
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let store = Arc::new(InMemoryStore::new());
    let posts = repo(ContentKind::Post, store.clone());
    let seeded = posts.load().await.unwrap();

    posts.remove(99).await.unwrap();
    assert_eq!(posts.load().await.unwrap(), seeded);

    posts.remove(2).await.unwrap();
    let once = stored(&store, "posts").await;
    posts.remove(2).await.unwrap();
    let twice = stored(&store, "posts").await;

    assert_eq!(once, twice);
    assert_eq!(once.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[tokio::test]
async fn test_colliding_ids_are_bumped() {
    let store = Arc::new(InMemoryStore::new());
    let clock = clock();
    let ids: Arc<dyn IdGenerator> = Arc::new(TimestampIdGenerator::new(clock.clone()));
    let blog = LocalCollectionRepository::new(ContentKind::BlogPost, store, ids, clock);

    let first = blog.create(ItemDraft::new("One", "C")).await.unwrap();
    let second = blog.create(ItemDraft::new("Two", "C")).await.unwrap();

    assert_eq!(first.id, NOW_MILLIS);
    assert_eq!(second.id, NOW_MILLIS + 1);
}

#[tokio::test]
async fn test_id_bump_at_max_takes_lowest_free_id() {
    let store = Arc::new(InMemoryStore::new());
    let clock = clock();
    let ids: Arc<dyn IdGenerator> = Arc::new(TimestampIdGenerator::new(clock.clone()));
    let seed = vec![
        ContentItem::new(NOW_MILLIS, "Now", Status::Draft, "2026-02-01"),
        ContentItem::new(i64::MAX, "Edited by hand", Status::Draft, "2026-02-01"),
        ContentItem::new(1, "One", Status::Draft, "2026-02-01"),
    ];
    let blog = LocalCollectionRepository::new(ContentKind::BlogPost, store, ids, clock)
        .with_seed(seed);

    let created = blog.create(ItemDraft::new("Next", "C")).await.unwrap();
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn test_quota_failure_surfaces_and_keeps_collection() {
    let store = Arc::new(InMemoryStore::with_quota(1_000));
    let blog = repo(ContentKind::BlogPost, store.clone()).with_seed(Vec::new());
    blog.load().await.unwrap();

    let err = blog
        .create(ItemDraft::new("Big", "x".repeat(2_000)))
        .await
        .unwrap_err();

    match err {
        DomainError::Repo(repo_err @ RepoError::Store(StoreError::QuotaExceeded { .. })) => {
            assert!(repo_err.is_retryable());
        }
        other => panic!("expected quota error, got {other:?}"),
    }
    assert!(blog.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_dyn_store_repository() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let clock = clock();
    let ids: Arc<dyn IdGenerator> = Arc::new(MonotonicIdGenerator::new(clock.clone()));
    let repo: Arc<dyn CollectionRepository> = Arc::new(LocalCollectionRepository::new(
        ContentKind::Article,
        store,
        ids,
        clock,
    ));

    assert_eq!(repo.kind(), ContentKind::Article);
    assert_eq!(repo.load().await.unwrap().len(), 3);
}
