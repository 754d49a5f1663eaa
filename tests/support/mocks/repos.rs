// tests/support/mocks/repos.rs
//! In-memory repository doubles backed by `Mutex`-wrapped maps, mirroring
//! what the postgres implementations do per table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use newsdesk_core::domain::author::{AuthorRefId, AuthorReference, AuthorRepository};
use newsdesk_core::domain::comment::{Comment, CommentRepository};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::holder::{HolderPage, HolderPageId, HolderRepository};
use newsdesk_core::domain::news::{
    AuthorName, NewNewsItem, NewsItem, NewsItemId, NewsItemUpdate, NewsReadRepository,
    NewsWriteRepository, UrlSegment,
};
use newsdesk_core::domain::rename::{NewRenameRecord, RenameRecord, RenameRepository};
use newsdesk_core::domain::tag::{NewTag, Tag, TagId, TagRepository, TagUpdate};

/* ---------------------------- news + rename history ---------------------------- */

/// One "database" for news items and their rename history, so the update +
/// rename write can behave atomically under a single lock, like the real
/// transaction does.
#[derive(Default)]
pub struct InMemoryNewsStore {
    items: Mutex<HashMap<i64, NewsItem>>,
    renames: Mutex<Vec<RenameRecord>>,
    next_item_id: AtomicI64,
    next_rename_id: AtomicI64,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            renames: Mutex::new(Vec::new()),
            next_item_id: AtomicI64::new(1),
            next_rename_id: AtomicI64::new(1),
        }
    }

    pub fn rename_count(&self) -> usize {
        self.renames.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsStore {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        let id = NewsItemId::new(self.next_item_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = NewsItem {
            id,
            title: item.title,
            author_name: item.author_name,
            author_id: item.author_id,
            slug: item.slug,
            synopsis: item.synopsis,
            body: item.body,
            publish_from: item.publish_from,
            live: item.live,
            commenting: item.commenting,
            posted: item.posted,
            kind: item.kind,
            external: item.external,
            holder_id: item.holder_id,
            tag_ids: item.tag_ids,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        self.items.lock().unwrap().insert(id.into(), stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        update: NewsItemUpdate,
        rename: Option<NewRenameRecord>,
    ) -> DomainResult<NewsItem> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))?;

        if let Some(rename) = rename {
            self.renames.lock().unwrap().push(RenameRecord {
                id: self.next_rename_id.fetch_add(1, Ordering::SeqCst),
                old_slug: rename.old_slug,
                news_id: rename.news_id,
                recorded_at: update.updated_at,
            });
        }

        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some((name, author_id)) = update.author {
            item.author_name = name;
            item.author_id = author_id;
        }
        if let Some(slug) = update.slug {
            item.slug = slug;
        }
        if let Some(synopsis) = update.synopsis {
            item.synopsis = synopsis;
        }
        if let Some(body) = update.body {
            item.body = body;
        }
        if let Some(publish_from) = update.publish_from {
            item.publish_from = publish_from;
        }
        if let Some(live) = update.live {
            item.live = live;
        }
        if let Some(commenting) = update.commenting {
            item.commenting = commenting;
        }
        if let Some(posted) = update.posted {
            item.posted = posted;
        }
        if let Some(kind) = update.kind {
            item.kind = kind;
        }
        if let Some(external) = update.external {
            item.external = external;
        }
        if let Some(holder_id) = update.holder_id {
            item.holder_id = holder_id;
        }
        if let Some(tag_ids) = update.tag_ids {
            item.tag_ids = tag_ids;
        }
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: NewsItemId) -> DomainResult<()> {
        self.items
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsStore {
    async fn find_by_id(&self, id: NewsItemId) -> DomainResult<Option<NewsItem>> {
        Ok(self.items.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<NewsItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .find(|item| item.slug == *slug)
            .cloned())
    }

    async fn slug_in_use(
        &self,
        candidate: &str,
        exclude: Option<NewsItemId>,
    ) -> DomainResult<bool> {
        Ok(self.items.lock().unwrap().values().any(|item| {
            item.slug.as_str() == candidate && exclude != Some(item.id)
        }))
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<NewsItem>> {
        let mut items: Vec<NewsItem> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| include_hidden || item.live)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.publish_from
                .cmp(&a.publish_from)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(items)
    }
}

#[async_trait]
impl RenameRepository for InMemoryNewsStore {
    async fn find_target(&self, old_slug: &UrlSegment) -> DomainResult<Option<NewsItemId>> {
        Ok(self
            .renames
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|record| record.old_slug == *old_slug)
            .map(|record| record.news_id))
    }

    async fn list_for(&self, news_id: NewsItemId) -> DomainResult<Vec<RenameRecord>> {
        let mut records: Vec<RenameRecord> = self
            .renames
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.news_id == news_id)
            .cloned()
            .collect();
        records.reverse();
        Ok(records)
    }
}

/* ---------------------------- author registry ---------------------------- */

#[derive(Default)]
pub struct InMemoryAuthorRepo {
    rows: Mutex<Vec<AuthorReference>>,
    next_id: AtomicI64,
}

impl InMemoryAuthorRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Pre-seed a row, bypassing the registry, to model legacy data.
    pub fn seed(&self, name: &str) -> AuthorRefId {
        let id = AuthorRefId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        self.rows.lock().unwrap().push(AuthorReference {
            id,
            original_name: AuthorName::new(name),
        });
        id
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn find_by_name(&self, name: &AuthorName) -> DomainResult<Vec<AuthorReference>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.original_name == *name)
            .cloned()
            .collect())
    }

    async fn insert(&self, name: AuthorName) -> DomainResult<AuthorReference> {
        let id = AuthorRefId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let row = AuthorReference {
            id,
            original_name: name,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/* ---------------------------- holder pages ---------------------------- */

#[derive(Default)]
pub struct InMemoryHolderRepo {
    pages: Mutex<Vec<HolderPage>>,
    next_id: AtomicI64,
}

impl InMemoryHolderRepo {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn add_page(&self, title: &str, slug: &str) -> HolderPageId {
        let id = HolderPageId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        self.pages.lock().unwrap().push(HolderPage {
            id,
            title: title.to_owned(),
            slug: slug.to_owned(),
        });
        id
    }
}

#[async_trait]
impl HolderRepository for InMemoryHolderRepo {
    async fn find_by_id(&self, id: HolderPageId) -> DomainResult<Option<HolderPage>> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|page| page.id == id)
            .cloned())
    }

    async fn first(&self) -> DomainResult<Option<HolderPage>> {
        Ok(self.pages.lock().unwrap().first().cloned())
    }

    async fn latest(&self) -> DomainResult<Option<HolderPage>> {
        Ok(self.pages.lock().unwrap().last().cloned())
    }
}

/* ---------------------------- tags ---------------------------- */

#[derive(Default)]
pub struct InMemoryTagRepo {
    rows: Mutex<HashMap<i64, Tag>>,
    next_id: AtomicI64,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<Tag>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|tag| tag.slug == *slug)
            .cloned())
    }

    async fn slug_in_use(&self, candidate: &str, exclude: Option<TagId>) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().values().any(|tag| {
            tag.slug.as_str() == candidate && exclude != Some(tag.id)
        }))
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self.rows.lock().unwrap().values().cloned().collect();
        tags.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(tags)
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let id = TagId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Tag {
            id,
            title: tag.title,
            description: tag.description,
            slug: tag.slug,
            sort_order: tag.sort_order,
            locale: tag.locale,
        };
        self.rows.lock().unwrap().insert(id.into(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let mut rows = self.rows.lock().unwrap();
        let tag = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        if let Some(title) = update.title {
            tag.title = title;
        }
        if let Some(description) = update.description {
            tag.description = description;
        }
        if let Some(slug) = update.slug {
            tag.slug = slug;
        }
        if let Some(sort_order) = update.sort_order {
            tag.sort_order = sort_order;
        }
        if let Some(locale) = update.locale {
            tag.locale = locale;
        }
        Ok(tag.clone())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))
    }
}

/* ---------------------------- comments ---------------------------- */

#[derive(Default)]
pub struct InMemoryCommentRepo {
    rows: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn add_comment(&self, news_id: NewsItemId, body: &str, spam_marked: bool) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Comment {
            id,
            news_id,
            author_name: "reader".into(),
            body: body.to_owned(),
            spam_marked,
            created_at: super::time::fixed_now(),
        });
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn list_visible_for(&self, news_id: NewsItemId) -> DomainResult<Vec<Comment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.news_id == news_id && !comment.spam_marked)
            .cloned()
            .collect())
    }
}
