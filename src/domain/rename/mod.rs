//! Append-only slug history, kept so old links can redirect after a rename.

use crate::domain::errors::DomainResult;
use crate::domain::news::value_objects::{NewsItemId, UrlSegment};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Immutable once written. Repeated renames to the same old slug produce
/// multiple records; history is never de-duplicated or pruned here.
#[derive(Debug, Clone)]
pub struct RenameRecord {
    pub id: i64,
    pub old_slug: UrlSegment,
    pub news_id: NewsItemId,
    pub recorded_at: DateTime<Utc>,
}

/// Captured before the new slug is adopted; persisted by the news write
/// repository inside the same transaction as the item update.
#[derive(Debug, Clone)]
pub struct NewRenameRecord {
    pub old_slug: UrlSegment,
    pub news_id: NewsItemId,
}

#[async_trait]
pub trait RenameRepository: Send + Sync {
    /// Most recent rename matching an old slug, for redirect lookups.
    async fn find_target(&self, old_slug: &UrlSegment) -> DomainResult<Option<NewsItemId>>;
    /// Full history for one item, newest first.
    async fn list_for(&self, news_id: NewsItemId) -> DomainResult<Vec<RenameRecord>>;
}
