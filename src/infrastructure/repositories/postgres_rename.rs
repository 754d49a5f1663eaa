// src/infrastructure/repositories/postgres_rename.rs
//! Read side of the rename history. Records are inserted by the news write
//! repository within the save transaction, never through this type.

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{NewsItemId, UrlSegment};
use crate::domain::rename::{RenameRecord, RenameRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRenameRepository {
    pool: PgPool,
}

impl PostgresRenameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RenameRow {
    id: i64,
    old_slug: String,
    news_id: i64,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<RenameRow> for RenameRecord {
    type Error = DomainError;

    fn try_from(row: RenameRow) -> Result<Self, Self::Error> {
        Ok(RenameRecord {
            id: row.id,
            old_slug: UrlSegment::new(row.old_slug)?,
            news_id: NewsItemId::new(row.news_id)?,
            recorded_at: row.recorded_at,
        })
    }
}

#[async_trait]
impl RenameRepository for PostgresRenameRepository {
    async fn find_target(&self, old_slug: &UrlSegment) -> DomainResult<Option<NewsItemId>> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT news_id FROM renamed WHERE old_slug = $1 ORDER BY recorded_at DESC, id DESC \
             LIMIT 1",
        )
        .bind(old_slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|(id,)| NewsItemId::new(id)).transpose()
    }

    async fn list_for(&self, news_id: NewsItemId) -> DomainResult<Vec<RenameRecord>> {
        let rows = sqlx::query_as::<_, RenameRow>(
            "SELECT id, old_slug, news_id, recorded_at FROM renamed WHERE news_id = $1 \
             ORDER BY recorded_at DESC, id DESC",
        )
        .bind(i64::from(news_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(RenameRecord::try_from).collect()
    }
}
