// src/infrastructure/repositories/postgres_holder.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::holder::{HolderPage, HolderPageId, HolderRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresHolderRepository {
    pool: PgPool,
}

impl PostgresHolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HolderRow {
    id: i64,
    title: String,
    slug: String,
}

impl TryFrom<HolderRow> for HolderPage {
    type Error = DomainError;

    fn try_from(row: HolderRow) -> Result<Self, Self::Error> {
        Ok(HolderPage {
            id: HolderPageId::new(row.id)?,
            title: row.title,
            slug: row.slug,
        })
    }
}

#[async_trait]
impl HolderRepository for PostgresHolderRepository {
    async fn find_by_id(&self, id: HolderPageId) -> DomainResult<Option<HolderPage>> {
        let row = sqlx::query_as::<_, HolderRow>(
            "SELECT id, title, slug FROM holder_pages WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(HolderPage::try_from).transpose()
    }

    async fn first(&self) -> DomainResult<Option<HolderPage>> {
        let row = sqlx::query_as::<_, HolderRow>(
            "SELECT id, title, slug FROM holder_pages ORDER BY id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(HolderPage::try_from).transpose()
    }

    async fn latest(&self) -> DomainResult<Option<HolderPage>> {
        let row = sqlx::query_as::<_, HolderRow>(
            "SELECT id, title, slug FROM holder_pages ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(HolderPage::try_from).transpose()
    }
}
