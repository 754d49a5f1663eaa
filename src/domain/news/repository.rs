use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNewsItem, NewsItem, NewsItemUpdate};
use crate::domain::news::value_objects::{NewsItemId, UrlSegment};
use crate::domain::rename::NewRenameRecord;
use async_trait::async_trait;

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsItemId) -> DomainResult<Option<NewsItem>>;
    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<NewsItem>>;
    /// Uniqueness probe for slug disambiguation, scoped to the news table and
    /// excluding the item being saved.
    async fn slug_in_use(
        &self,
        candidate: &str,
        exclude: Option<NewsItemId>,
    ) -> DomainResult<bool>;
    /// Newest publish-from first; hidden items only when `include_hidden`.
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<NewsItem>>;
}

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem>;
    /// Applies the update and, when present, persists the rename record in
    /// the same transaction. History must never be dropped while the rest of
    /// the save succeeds.
    async fn update(
        &self,
        update: NewsItemUpdate,
        rename: Option<NewRenameRecord>,
    ) -> DomainResult<NewsItem>;
    async fn delete(&self, id: NewsItemId) -> DomainResult<()>;
}
