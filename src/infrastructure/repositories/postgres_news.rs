// src/infrastructure/repositories/postgres_news.rs
use super::map_sqlx;
use crate::domain::author::AuthorRefId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::holder::HolderPageId;
use crate::domain::news::{
    AuthorName, ExternalLink, NewNewsItem, NewsItem, NewsItemId, NewsItemUpdate, NewsKind,
    NewsReadRepository, NewsTitle, NewsWriteRepository, UrlSegment,
};
use crate::domain::rename::NewRenameRecord;
use crate::domain::tag::TagId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const NEWS_COLUMNS: &str = "id, title, author, author_id, slug, synopsis, body, publish_from, \
     live, commenting, posted, kind, external, holder_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresNewsWriteRepository {
    pool: PgPool,
}

impl PostgresNewsWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNewsReadRepository {
    pool: PgPool,
}

impl PostgresNewsReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    author: String,
    author_id: i64,
    slug: String,
    synopsis: String,
    body: String,
    publish_from: NaiveDate,
    live: bool,
    commenting: bool,
    posted: bool,
    kind: String,
    external: Option<String>,
    holder_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewsRow {
    fn hydrate(self, tag_ids: Vec<TagId>) -> Result<NewsItem, DomainError> {
        Ok(NewsItem {
            id: NewsItemId::new(self.id)?,
            title: NewsTitle::new(self.title)?,
            author_name: AuthorName::new(self.author),
            author_id: AuthorRefId::new(self.author_id)?,
            slug: UrlSegment::new(self.slug)?,
            synopsis: self.synopsis,
            body: self.body,
            publish_from: self.publish_from,
            live: self.live,
            commenting: self.commenting,
            posted: self.posted,
            kind: NewsKind::parse(&self.kind)?,
            external: self.external.map(ExternalLink::new).transpose()?,
            holder_id: HolderPageId::new(self.holder_id)?,
            tag_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn load_tag_ids(pool: &PgPool, news_id: i64) -> DomainResult<Vec<TagId>> {
    let rows: Vec<(i64,)> =
        sqlx::query_as("SELECT tag_id FROM news_tags WHERE news_id = $1 ORDER BY tag_id")
            .bind(news_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx)?;
    rows.into_iter().map(|(id,)| TagId::new(id)).collect()
}

async fn replace_tag_links(
    tx: &mut Transaction<'_, Postgres>,
    news_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM news_tags WHERE news_id = $1")
        .bind(news_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    for tag_id in tag_ids {
        sqlx::query("INSERT INTO news_tags (news_id, tag_id) VALUES ($1, $2)")
            .bind(news_id)
            .bind(i64::from(*tag_id))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl NewsWriteRepository for PostgresNewsWriteRepository {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        let NewNewsItem {
            title,
            author_name,
            author_id,
            slug,
            synopsis,
            body,
            publish_from,
            live,
            commenting,
            posted,
            kind,
            external,
            holder_id,
            tag_ids,
            created_at,
            updated_at,
        } = item;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO news_items \
             (title, author, author_id, slug, synopsis, body, publish_from, live, commenting, \
              posted, kind, external, holder_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {NEWS_COLUMNS}"
        );
        let row = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(title.as_str())
            .bind(author_name.as_str())
            .bind(i64::from(author_id))
            .bind(slug.as_str())
            .bind(&synopsis)
            .bind(&body)
            .bind(publish_from)
            .bind(live)
            .bind(commenting)
            .bind(posted)
            .bind(kind.as_str())
            .bind(external.as_ref().map(ExternalLink::as_str))
            .bind(i64::from(holder_id))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        replace_tag_links(&mut tx, row.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.hydrate(tag_ids)
    }

    async fn update(
        &self,
        update: NewsItemUpdate,
        rename: Option<NewRenameRecord>,
    ) -> DomainResult<NewsItem> {
        let NewsItemUpdate {
            id,
            title,
            author,
            slug,
            synopsis,
            body,
            publish_from,
            live,
            commenting,
            posted,
            kind,
            external,
            holder_id,
            tag_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Rename history rides the same transaction: it must never be
        // dropped while the rest of the save goes through.
        if let Some(rename) = &rename {
            sqlx::query(
                "INSERT INTO renamed (old_slug, news_id, recorded_at) VALUES ($1, $2, $3)",
            )
            .bind(rename.old_slug.as_str())
            .bind(i64::from(rename.news_id))
            .bind(updated_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE news_items SET updated_at = ");
        builder.push_bind(updated_at);
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some((name, author_id)) = author {
            builder.push(", author = ");
            builder.push_bind(String::from(name));
            builder.push(", author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(synopsis) = synopsis {
            builder.push(", synopsis = ");
            builder.push_bind(synopsis);
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body);
        }
        if let Some(publish_from) = publish_from {
            builder.push(", publish_from = ");
            builder.push_bind(publish_from);
        }
        if let Some(live) = live {
            builder.push(", live = ");
            builder.push_bind(live);
        }
        if let Some(commenting) = commenting {
            builder.push(", commenting = ");
            builder.push_bind(commenting);
        }
        if let Some(posted) = posted {
            builder.push(", posted = ");
            builder.push_bind(posted);
        }
        if let Some(kind) = kind {
            builder.push(", kind = ");
            builder.push_bind(kind.as_str());
        }
        if let Some(external) = external {
            builder.push(", external = ");
            builder.push_bind(external.map(String::from));
        }
        if let Some(holder_id) = holder_id {
            builder.push(", holder_id = ");
            builder.push_bind(i64::from(holder_id));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {NEWS_COLUMNS}"));

        let row = builder
            .build_query_as::<NewsRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))?;

        let tag_ids = match tag_ids {
            Some(tag_ids) => {
                replace_tag_links(&mut tx, row.id, &tag_ids).await?;
                tag_ids
            }
            None => {
                let rows: Vec<(i64,)> = sqlx::query_as(
                    "SELECT tag_id FROM news_tags WHERE news_id = $1 ORDER BY tag_id",
                )
                .bind(row.id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx)?;
                rows.into_iter()
                    .map(|(id,)| TagId::new(id))
                    .collect::<DomainResult<Vec<_>>>()?
            }
        };

        tx.commit().await.map_err(map_sqlx)?;
        row.hydrate(tag_ids)
    }

    async fn delete(&self, id: NewsItemId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news_items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news item not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for PostgresNewsReadRepository {
    async fn find_by_id(&self, id: NewsItemId) -> DomainResult<Option<NewsItem>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news_items WHERE id = $1");
        let row = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        match row {
            None => Ok(None),
            Some(row) => {
                let tag_ids = load_tag_ids(&self.pool, row.id).await?;
                Ok(Some(row.hydrate(tag_ids)?))
            }
        }
    }

    async fn find_by_slug(&self, slug: &UrlSegment) -> DomainResult<Option<NewsItem>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news_items WHERE slug = $1");
        let row = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        match row {
            None => Ok(None),
            Some(row) => {
                let tag_ids = load_tag_ids(&self.pool, row.id).await?;
                Ok(Some(row.hydrate(tag_ids)?))
            }
        }
    }

    async fn slug_in_use(
        &self,
        candidate: &str,
        exclude: Option<NewsItemId>,
    ) -> DomainResult<bool> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS( \
               SELECT 1 FROM news_items \
               WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2))",
        )
        .bind(candidate)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(taken)
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<NewsItem>> {
        let sql = format!(
            "SELECT {NEWS_COLUMNS} FROM news_items \
             WHERE ($1 OR live) ORDER BY publish_from DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(include_hidden)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let tag_ids = load_tag_ids(&self.pool, row.id).await?;
            items.push(row.hydrate(tag_ids)?);
        }
        Ok(items)
    }
}
