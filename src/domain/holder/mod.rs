//! Holder pages: the structural parents every news item belongs to. Owned by
//! the host framework; this core only reads them to satisfy the association
//! invariant.

use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolderPageId(pub i64);

impl HolderPageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "holder page id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<HolderPageId> for i64 {
    fn from(value: HolderPageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct HolderPage {
    pub id: HolderPageId,
    pub title: String,
    pub slug: String,
}

#[async_trait]
pub trait HolderRepository: Send + Sync {
    async fn find_by_id(&self, id: HolderPageId) -> DomainResult<Option<HolderPage>>;
    /// Oldest holder page by creation.
    async fn first(&self) -> DomainResult<Option<HolderPage>>;
    /// Most recently created holder page.
    async fn latest(&self) -> DomainResult<Option<HolderPage>>;
}
