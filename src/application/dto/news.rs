use crate::domain::comment::Comment;
use crate::domain::news::{NewsItem, NewsKind};
use crate::domain::rename::RenameRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItemDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub author_id: i64,
    pub slug: String,
    pub synopsis: String,
    pub body: String,
    pub publish_from: NaiveDate,
    pub live: bool,
    pub commenting: bool,
    pub posted: bool,
    pub kind: NewsKind,
    pub external: Option<String>,
    pub holder_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsItem> for NewsItemDto {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id.into(),
            title: item.title.into(),
            author: item.author_name.into(),
            author_id: item.author_id.into(),
            slug: item.slug.into(),
            synopsis: item.synopsis,
            body: item.body,
            publish_from: item.publish_from,
            live: item.live,
            commenting: item.commenting,
            posted: item.posted,
            kind: item.kind,
            external: item.external.map(Into::into),
            holder_id: item.holder_id.into(),
            tag_ids: item.tag_ids.into_iter().map(Into::into).collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Result of a slug lookup. An unknown slug that matches rename history
/// reports the item's current slug so the caller can issue a redirect.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NewsLookup {
    Found(NewsItemDto),
    Moved { current_slug: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRecordDto {
    pub old_slug: String,
    pub news_id: i64,
    pub recorded_at: DateTime<Utc>,
}

impl From<RenameRecord> for RenameRecordDto {
    fn from(record: RenameRecord) -> Self {
        Self {
            old_slug: record.old_slug.into(),
            news_id: record.news_id.into(),
            recorded_at: record.recorded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub news_id: i64,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            news_id: comment.news_id.into(),
            author_name: comment.author_name,
            body: comment.body,
            created_at: comment.created_at,
        }
    }
}
