// src/application/queries/news/get_by_slug.rs
use super::service::NewsQueryService;
use crate::{
    application::{
        dto::{AuthenticatedMember, NewsLookup},
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{specifications::CanViewNewsSpec, NewsItem, UrlSegment},
};
use std::collections::HashSet;

pub struct GetNewsBySlugQuery {
    pub slug: String,
}

impl NewsQueryService {
    fn ensure_visible(
        actor: Option<&AuthenticatedMember>,
        item: &NewsItem,
    ) -> ApplicationResult<()> {
        let empty = HashSet::new();
        let capabilities = actor.map_or(&empty, |actor| &actor.capabilities);
        if CanViewNewsSpec::new(capabilities, item).is_satisfied() {
            Ok(())
        } else {
            // Hidden items are indistinguishable from missing ones.
            Err(ApplicationError::not_found("news item not found"))
        }
    }

    /// Slug lookup with redirect support: a slug that no longer matches any
    /// item is checked against rename history, and a hit reports the item's
    /// current slug.
    pub async fn get_news_by_slug(
        &self,
        actor: Option<&AuthenticatedMember>,
        query: GetNewsBySlugQuery,
    ) -> ApplicationResult<NewsLookup> {
        let slug = UrlSegment::new(query.slug)?;

        if let Some(item) = self.read_repo.find_by_slug(&slug).await? {
            Self::ensure_visible(actor, &item)?;
            return Ok(NewsLookup::Found(item.into()));
        }

        let Some(news_id) = self.rename_repo.find_target(&slug).await? else {
            return Err(ApplicationError::not_found("news item not found"));
        };
        let item = self
            .read_repo
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        Self::ensure_visible(actor, &item)?;
        Ok(NewsLookup::Moved {
            current_slug: item.slug.into(),
        })
    }
}
