// src/application/commands/tags/update.rs
use super::capability::ensure_capability;
use super::service::{TagCommandService, TagSlugProbe};
use crate::{
    application::{
        dto::{AuthenticatedMember, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{NewsTitle, UrlSegment},
        slugging::needs_resolution,
        tag::{TagId, TagUpdate},
    },
};

#[derive(Default)]
pub struct UpdateTagCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub locale: Option<Option<String>>,
    pub slug: Option<String>,
}

impl TagCommandService {
    /// Tags run the slug half of the save pipeline: same trigger, same
    /// disambiguation loop, no rename history.
    pub async fn update_tag(
        &self,
        actor: &AuthenticatedMember,
        command: UpdateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_capability(actor, "tags", "manage")?;

        let id = TagId::new(command.id)?;
        let tag = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let mut update = TagUpdate::new(id);

        let title_changed = command
            .title
            .as_deref()
            .is_some_and(|title| title != tag.title.as_str());
        let title = match command.title {
            Some(raw) => {
                let title = NewsTitle::new(raw)?;
                update = update.with_title(title.clone());
                title
            }
            None => tag.title.clone(),
        };

        let segment_overridden = command.slug.is_some();
        if let Some(manual) = command.slug {
            update = update.with_slug(UrlSegment::new(manual)?);
        }
        if needs_resolution(Some(&tag.slug), title_changed, segment_overridden) {
            let probe = TagSlugProbe {
                repo: self.repo.as_ref(),
                exclude: Some(id),
            };
            let slug = self.resolver.resolve(title.as_str(), &probe).await?;
            update = update.with_slug(slug);
        }

        if let Some(description) = command.description {
            update = update.with_description(description);
        }
        if let Some(sort_order) = command.sort_order {
            update = update.with_sort_order(sort_order);
        }
        if let Some(locale) = command.locale {
            update = update.with_locale(locale);
        }

        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
