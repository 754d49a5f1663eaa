// src/application/commands/news/pipeline.rs
//! Shared save-pipeline steps: holder association, author resolution,
//! external-link normalization, and post-commit notification.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::service::NewsCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    config::HolderPolicy,
    domain::{
        author::AuthorRefId,
        errors::DomainResult,
        holder::HolderPageId,
        news::{
            repository::NewsReadRepository, AuthorName, ExternalLink, NewsItem, NewsItemId,
            NewsKind,
        },
        slugging::SlugUniquenessProbe,
    },
};

/// Uniqueness probe over the news table, excluding the item being saved.
pub(super) struct NewsSlugProbe<'a> {
    pub repo: &'a dyn NewsReadRepository,
    pub exclude: Option<NewsItemId>,
}

#[async_trait]
impl SlugUniquenessProbe for NewsSlugProbe<'_> {
    async fn is_taken(&self, candidate: &str) -> DomainResult<bool> {
        self.repo.slug_in_use(candidate, self.exclude).await
    }
}

impl NewsCommandService {
    /// Every item belongs to exactly one holder page; pick one for items
    /// saved without an association, per the configured policy.
    pub(super) async fn choose_holder(&self) -> ApplicationResult<HolderPageId> {
        let page = match self.config.holder_policy() {
            HolderPolicy::First => self.holder_repo.first().await?,
            HolderPolicy::Latest => self.holder_repo.latest().await?,
            HolderPolicy::Configured(id) => self.holder_repo.find_by_id(id).await?,
        };
        page.map(|page| page.id)
            .ok_or_else(|| ApplicationError::not_found("no holder page available"))
    }

    pub(super) async fn holder_for(
        &self,
        requested: Option<i64>,
    ) -> ApplicationResult<HolderPageId> {
        match requested {
            None => self.choose_holder().await,
            Some(raw) => {
                let id = HolderPageId::new(raw)?;
                self.holder_repo
                    .find_by_id(id)
                    .await?
                    .map(|page| page.id)
                    .ok_or_else(|| ApplicationError::not_found("holder page not found"))
            }
        }
    }

    /// Author registry lookup: trim, exact match, create on first use. The
    /// insert happens immediately rather than with the parent save, so a
    /// repeated identical name never creates a second row.
    pub(super) async fn resolve_author(
        &self,
        raw: &str,
    ) -> ApplicationResult<(AuthorName, AuthorRefId)> {
        let name = AuthorName::new(raw);
        let matches = self.author_repo.find_by_name(&name).await?;
        match matches.first() {
            None => {
                let created = self.author_repo.insert(name.clone()).await?;
                debug!(author = %name, id = i64::from(created.id), "created author reference");
                Ok((name, created.id))
            }
            Some(reference) => {
                if matches.len() > 1 {
                    warn!(
                        author = %name,
                        count = matches.len(),
                        "multiple author references for one name; taking the first"
                    );
                }
                Ok((name, reference.id))
            }
        }
    }

    /// Empty input stays empty; a bare host gains the configured scheme.
    pub(super) fn normalize_external(
        &self,
        raw: &str,
    ) -> ApplicationResult<Option<ExternalLink>> {
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ExternalLink::normalize(
                raw,
                self.config.default_scheme(),
            )?))
        }
    }

    pub(super) fn ensure_external_present(
        kind: NewsKind,
        external: Option<&ExternalLink>,
    ) -> ApplicationResult<()> {
        if kind == NewsKind::External && external.is_none() {
            return Err(ApplicationError::validation(
                "external items require an external link",
            ));
        }
        Ok(())
    }

    /// Fire the notifier for a committed save that latched the posted flag.
    /// The save is already durable, so a notifier failure is logged and
    /// swallowed; the latch prevents any duplicate attempt.
    pub(super) async fn notify(&self, item: &NewsItem) {
        if let Some(notifier) = &self.notifier {
            if let Err(err) = notifier.publish(item).await {
                warn!(
                    slug = %item.slug,
                    error = %err,
                    "social notification failed after save"
                );
            }
        }
    }
}
