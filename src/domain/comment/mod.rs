//! Reader comments on news items. Moderation happens upstream; this core
//! only knows the spam flag the moderation hook sets.

use crate::domain::errors::DomainResult;
use crate::domain::news::value_objects::NewsItemId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub news_id: NewsItemId,
    pub author_name: String,
    pub body: String,
    pub spam_marked: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments fit for display: spam-marked rows excluded, oldest first.
    async fn list_visible_for(&self, news_id: NewsItemId) -> DomainResult<Vec<Comment>>;
}
