// src/application/commands/tags/create.rs
use super::capability::ensure_capability;
use super::service::{TagCommandService, TagSlugProbe};
use crate::{
    application::{
        dto::{AuthenticatedMember, TagDto},
        error::ApplicationResult,
    },
    domain::{
        news::{NewsTitle, UrlSegment},
        tag::NewTag,
    },
};

pub struct CreateTagCommand {
    pub title: String,
    pub description: String,
    pub sort_order: i32,
    pub locale: Option<String>,
    pub slug: Option<String>,
}

impl TagCommandService {
    pub async fn create_tag(
        &self,
        actor: &AuthenticatedMember,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_capability(actor, "tags", "manage")?;

        let title = NewsTitle::new(command.title)?;
        let slug = match command.slug {
            Some(manual) => UrlSegment::new(manual)?,
            None => {
                let probe = TagSlugProbe {
                    repo: self.repo.as_ref(),
                    exclude: None,
                };
                self.resolver.resolve(title.as_str(), &probe).await?
            }
        };

        let created = self
            .repo
            .insert(NewTag {
                title,
                description: command.description,
                slug,
                sort_order: command.sort_order,
                locale: command.locale,
            })
            .await?;
        Ok(created.into())
    }
}
