// src/domain/news/entity.rs
use crate::domain::author::AuthorRefId;
use crate::domain::holder::HolderPageId;
use crate::domain::news::value_objects::{
    AuthorName, ExternalLink, NewsItemId, NewsKind, NewsTitle, UrlSegment,
};
use crate::domain::tag::TagId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: NewsItemId,
    pub title: NewsTitle,
    pub author_name: AuthorName,
    pub author_id: AuthorRefId,
    pub slug: UrlSegment,
    pub synopsis: String,
    pub body: String,
    pub publish_from: NaiveDate,
    pub live: bool,
    pub commenting: bool,
    pub posted: bool,
    pub kind: NewsKind,
    pub external: Option<ExternalLink>,
    pub holder_id: HolderPageId,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whether a save carrying these flags should latch the posted flag and fire
/// the social notifier once the write commits: visible, publish date not in
/// the future, not already posted. Both create and update route through this
/// so the predicate cannot drift between them.
pub fn notification_due(
    live: bool,
    publish_from: NaiveDate,
    posted: bool,
    today: NaiveDate,
) -> bool {
    live && publish_from <= today && !posted
}

/// Fully resolved state for a first insert; every pipeline step has already
/// run by the time this is handed to the write repository.
#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub title: NewsTitle,
    pub author_name: AuthorName,
    pub author_id: AuthorRefId,
    pub slug: UrlSegment,
    pub synopsis: String,
    pub body: String,
    pub publish_from: NaiveDate,
    pub live: bool,
    pub commenting: bool,
    pub posted: bool,
    pub kind: NewsKind,
    pub external: Option<ExternalLink>,
    pub holder_id: HolderPageId,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsItemUpdate {
    pub id: NewsItemId,
    pub title: Option<NewsTitle>,
    pub author: Option<(AuthorName, AuthorRefId)>,
    pub slug: Option<UrlSegment>,
    pub synopsis: Option<String>,
    pub body: Option<String>,
    pub publish_from: Option<NaiveDate>,
    pub live: Option<bool>,
    pub commenting: Option<bool>,
    pub posted: Option<bool>,
    pub kind: Option<NewsKind>,
    pub external: Option<Option<ExternalLink>>,
    pub holder_id: Option<HolderPageId>,
    pub tag_ids: Option<Vec<TagId>>,
    pub updated_at: DateTime<Utc>,
}

impl NewsItemUpdate {
    pub fn new(id: NewsItemId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            author: None,
            slug: None,
            synopsis: None,
            body: None,
            publish_from: None,
            live: None,
            commenting: None,
            posted: None,
            kind: None,
            external: None,
            holder_id: None,
            tag_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: NewsTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_author(mut self, name: AuthorName, author_id: AuthorRefId) -> Self {
        self.author = Some((name, author_id));
        self
    }

    pub fn with_slug(mut self, slug: UrlSegment) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_publish_from(mut self, publish_from: NaiveDate) -> Self {
        self.publish_from = Some(publish_from);
        self
    }

    pub fn with_live(mut self, live: bool) -> Self {
        self.live = Some(live);
        self
    }

    pub fn with_commenting(mut self, commenting: bool) -> Self {
        self.commenting = Some(commenting);
        self
    }

    pub fn with_posted(mut self, posted: bool) -> Self {
        self.posted = Some(posted);
        self
    }

    pub fn with_kind(mut self, kind: NewsKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_external(mut self, external: Option<ExternalLink>) -> Self {
        self.external = Some(external);
        self
    }

    pub fn with_holder(mut self, holder_id: HolderPageId) -> Self {
        self.holder_id = Some(holder_id);
        self
    }

    pub fn with_tag_ids(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_requires_live_and_due_and_unposted() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let future = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        assert!(notification_due(true, due, false, today));
        assert!(notification_due(true, today, false, today));
        assert!(!notification_due(true, due, true, today));
        assert!(!notification_due(true, future, false, today));
        assert!(!notification_due(false, due, false, today));
    }
}
