// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{AuthorRefId, AuthorReference, AuthorRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::AuthorName;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    original_name: String,
}

impl TryFrom<AuthorRow> for AuthorReference {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(AuthorReference {
            id: AuthorRefId::new(row.id)?,
            original_name: AuthorName::new(row.original_name),
        })
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_name(&self, name: &AuthorName) -> DomainResult<Vec<AuthorReference>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, original_name FROM author_refs WHERE original_name = $1 ORDER BY id",
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(AuthorReference::try_from).collect()
    }

    async fn insert(&self, name: AuthorName) -> DomainResult<AuthorReference> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO author_refs (original_name) VALUES ($1) RETURNING id, original_name",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        AuthorReference::try_from(row)
    }
}
