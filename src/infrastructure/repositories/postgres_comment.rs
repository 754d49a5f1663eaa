// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{Comment, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::NewsItemId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    news_id: i64,
    author_name: String,
    body: String,
    spam_marked: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: row.id,
            news_id: NewsItemId::new(row.news_id)?,
            author_name: row.author_name,
            body: row.body,
            spam_marked: row.spam_marked,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_visible_for(&self, news_id: NewsItemId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, news_id, author_name, body, spam_marked, created_at FROM comments \
             WHERE news_id = $1 AND NOT spam_marked ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(news_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Comment::try_from).collect()
    }
}
