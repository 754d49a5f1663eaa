use crate::domain::errors::DomainResult;
use crate::domain::news::value_objects::UrlSegment;
use crate::domain::tag::entity::{NewTag, Tag, TagUpdate};
use crate::domain::tag::TagId;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<Tag>>;
    async fn slug_in_use(&self, candidate: &str, exclude: Option<TagId>) -> DomainResult<bool>;
    /// Sort-order ascending.
    async fn list(&self) -> DomainResult<Vec<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, update: TagUpdate) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
}
