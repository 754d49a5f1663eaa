// src/application/commands/news/create.rs
use super::{capability::ensure_capability, pipeline::NewsSlugProbe, service::NewsCommandService};
use crate::{
    application::{
        dto::{AuthenticatedMember, NewsItemDto},
        error::ApplicationResult,
    },
    domain::{
        news::{notification_due, NewNewsItem, NewsKind, NewsTitle, UrlSegment},
        tag::TagId,
    },
};
use chrono::NaiveDate;

pub struct CreateNewsCommand {
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub body: String,
    pub publish_from: Option<NaiveDate>,
    pub live: bool,
    pub commenting: bool,
    pub kind: Option<String>,
    pub external: String,
    pub slug: Option<String>,
    pub holder_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreateNewsCommand {
    pub fn builder() -> CreateNewsCommandBuilder {
        CreateNewsCommandBuilder::default()
    }
}

pub struct CreateNewsCommandBuilder {
    title: Option<String>,
    author: Option<String>,
    synopsis: String,
    body: String,
    publish_from: Option<NaiveDate>,
    live: bool,
    commenting: bool,
    kind: Option<String>,
    external: String,
    slug: Option<String>,
    holder_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl Default for CreateNewsCommandBuilder {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            synopsis: String::new(),
            body: String::new(),
            publish_from: None,
            // Items are visible and commentable unless the editor says
            // otherwise.
            live: true,
            commenting: true,
            kind: None,
            external: String::new(),
            slug: None,
            holder_id: None,
            tag_ids: Vec::new(),
        }
    }
}

impl CreateNewsCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn publish_from(mut self, publish_from: NaiveDate) -> Self {
        self.publish_from = Some(publish_from);
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn commenting(mut self, commenting: bool) -> Self {
        self.commenting = commenting;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn external(mut self, external: impl Into<String>) -> Self {
        self.external = external.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn holder_id(mut self, holder_id: i64) -> Self {
        self.holder_id = Some(holder_id);
        self
    }

    pub fn tag_ids(mut self, tag_ids: Vec<i64>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    pub fn build(self) -> Result<CreateNewsCommand, &'static str> {
        Ok(CreateNewsCommand {
            title: self.title.ok_or("title is required")?,
            author: self.author.ok_or("author is required")?,
            synopsis: self.synopsis,
            body: self.body,
            publish_from: self.publish_from,
            live: self.live,
            commenting: self.commenting,
            kind: self.kind,
            external: self.external,
            slug: self.slug,
            holder_id: self.holder_id,
            tag_ids: self.tag_ids,
        })
    }
}

impl NewsCommandService {
    pub async fn create_news(
        &self,
        actor: &AuthenticatedMember,
        command: CreateNewsCommand,
    ) -> ApplicationResult<NewsItemDto> {
        ensure_capability(actor, "news", "create")?;

        let title = NewsTitle::new(command.title)?;
        let now = self.clock.now();
        let today = now.date_naive();

        // Fill in whatever the editor left blank.
        let kind = command
            .kind
            .as_deref()
            .map(NewsKind::parse)
            .transpose()?
            .unwrap_or_default();
        let external = self.normalize_external(&command.external)?;
        Self::ensure_external_present(kind, external.as_ref())?;
        let publish_from = command.publish_from.unwrap_or(today);

        let holder_id = self.holder_for(command.holder_id).await?;

        // Manual segments are adopted verbatim.
        let slug = match command.slug {
            Some(manual) => UrlSegment::new(manual)?,
            None => {
                let probe = NewsSlugProbe {
                    repo: self.read_repo.as_ref(),
                    exclude: None,
                };
                self.resolver.resolve(title.as_str(), &probe).await?
            }
        };

        let (author_name, author_id) = self.resolve_author(&command.author).await?;

        let tag_ids = command
            .tag_ids
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;

        // The notification latch is part of the very first write; no
        // post-save re-save.
        let should_notify = self.notifier.is_some()
            && notification_due(command.live, publish_from, false, today);

        let new_item = NewNewsItem {
            title,
            author_name,
            author_id,
            slug,
            synopsis: command.synopsis,
            body: command.body,
            publish_from,
            live: command.live,
            commenting: command.commenting,
            posted: should_notify,
            kind,
            external,
            holder_id,
            tag_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_item).await?;
        if should_notify {
            self.notify(&created).await;
        }
        Ok(created.into())
    }
}
