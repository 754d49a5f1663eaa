// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{NewsTitle, UrlSegment};
use crate::domain::tag::{NewTag, Tag, TagId, TagRepository, TagUpdate};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
    sort_order: i32,
    locale: Option<String>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            title: NewsTitle::new(row.title)?,
            description: row.description,
            slug: UrlSegment::new(row.slug)?,
            sort_order: row.sort_order,
            locale: row.locale,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, description, slug, sort_order, locale FROM tags WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, description, slug, sort_order, locale FROM tags WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn slug_in_use(&self, candidate: &str, exclude: Option<TagId>) -> DomainResult<bool> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS( \
               SELECT 1 FROM tags WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2))",
        )
        .bind(candidate)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(taken)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, description, slug, sort_order, locale FROM tags \
             ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (title, description, slug, sort_order, locale) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, description, slug, sort_order, locale",
        )
        .bind(tag.title.as_str())
        .bind(&tag.description)
        .bind(tag.slug.as_str())
        .bind(tag.sort_order)
        .bind(&tag.locale)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Tag::try_from(row)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let TagUpdate {
            id,
            title,
            description,
            slug,
            sort_order,
            locale,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tags SET id = id");
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(sort_order) = sort_order {
            builder.push(", sort_order = ");
            builder.push_bind(sort_order);
        }
        if let Some(locale) = locale {
            builder.push(", locale = ");
            builder.push_bind(locale);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, title, description, slug, sort_order, locale");

        let row = builder
            .build_query_as::<TagRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        Tag::try_from(row)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        Ok(())
    }
}
