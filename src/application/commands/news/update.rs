// src/application/commands/news/update.rs
use super::{capability::ensure_capability, pipeline::NewsSlugProbe, service::NewsCommandService};
use crate::{
    application::{
        dto::{AuthenticatedMember, NewsItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{notification_due, NewsItemId, NewsItemUpdate, NewsKind, NewsTitle, UrlSegment},
        rename::NewRenameRecord,
        slugging::needs_resolution,
        tag::TagId,
    },
};
use chrono::NaiveDate;

#[derive(Default)]
pub struct UpdateNewsCommand {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub synopsis: Option<String>,
    pub body: Option<String>,
    pub publish_from: Option<NaiveDate>,
    pub live: Option<bool>,
    pub commenting: Option<bool>,
    pub kind: Option<String>,
    pub external: Option<String>,
    pub slug: Option<String>,
    pub holder_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
}

impl NewsCommandService {
    #[allow(clippy::too_many_lines)]
    pub async fn update_news(
        &self,
        actor: &AuthenticatedMember,
        command: UpdateNewsCommand,
    ) -> ApplicationResult<NewsItemDto> {
        ensure_capability(actor, "news", "update")?;

        let id = NewsItemId::new(command.id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let now = self.clock.now();
        let today = now.date_naive();
        let mut update = NewsItemUpdate::new(id, now);

        // Normalization runs over the merged state, not just the patch.
        let kind = match command.kind.as_deref() {
            Some(raw) => {
                let kind = NewsKind::parse(raw)?;
                update = update.with_kind(kind);
                kind
            }
            None => item.kind,
        };
        let external = match command.external.as_deref() {
            Some(raw) => {
                let normalized = self.normalize_external(raw)?;
                update = update.with_external(normalized.clone());
                normalized
            }
            None => item.external.clone(),
        };
        Self::ensure_external_present(kind, external.as_ref())?;

        let publish_from = match command.publish_from {
            Some(date) => {
                update = update.with_publish_from(date);
                date
            }
            None => item.publish_from,
        };
        let live = match command.live {
            Some(live) => {
                update = update.with_live(live);
                live
            }
            None => item.live,
        };
        if let Some(commenting) = command.commenting {
            update = update.with_commenting(commenting);
        }
        if let Some(synopsis) = command.synopsis {
            update = update.with_synopsis(synopsis);
        }
        if let Some(body) = command.body {
            update = update.with_body(body);
        }
        if let Some(raw_ids) = command.tag_ids {
            let tag_ids = raw_ids
                .into_iter()
                .map(TagId::new)
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_tag_ids(tag_ids);
        }

        // Persisted items always have a holder; only an explicit request
        // moves them.
        if let Some(raw) = command.holder_id {
            let holder_id = self.holder_for(Some(raw)).await?;
            update = update.with_holder(holder_id);
        }

        let title_changed = command
            .title
            .as_deref()
            .is_some_and(|title| title != item.title.as_str());
        let title = match command.title {
            Some(raw) => {
                let title = NewsTitle::new(raw)?;
                update = update.with_title(title.clone());
                title
            }
            None => item.title.clone(),
        };

        let segment_overridden = command.slug.is_some();
        if let Some(manual) = command.slug {
            update = update.with_slug(UrlSegment::new(manual)?);
        }

        let rename = if needs_resolution(Some(&item.slug), title_changed, segment_overridden) {
            let probe = NewsSlugProbe {
                repo: self.read_repo.as_ref(),
                exclude: Some(id),
            };
            let slug = self.resolver.resolve(title.as_str(), &probe).await?;
            update = update.with_slug(slug);
            // Old segment captured before the new one is adopted; committed
            // in the same transaction as the update.
            Some(NewRenameRecord {
                old_slug: item.slug.clone(),
                news_id: id,
            })
        } else {
            None
        };

        // Author resolution runs on every save, changed or not; it is
        // idempotent after the first creation.
        let raw_author = command
            .author
            .unwrap_or_else(|| item.author_name.as_str().to_owned());
        let (author_name, author_id) = self.resolve_author(&raw_author).await?;
        update = update.with_author(author_name, author_id);

        let should_notify = self.notifier.is_some()
            && notification_due(live, publish_from, item.posted, today);
        if should_notify {
            update = update.with_posted(true);
        }

        let updated = self.write_repo.update(update, rename).await?;
        if should_notify {
            self.notify(&updated).await;
        }
        Ok(updated.into())
    }
}
