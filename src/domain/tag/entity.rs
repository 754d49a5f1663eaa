use crate::domain::news::value_objects::{NewsTitle, UrlSegment};
use crate::domain::tag::TagId;

/// Categorization label for news items. Listing order is `sort_order`
/// ascending; the locale field is carried for the host's translation layer.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub title: NewsTitle,
    pub description: String,
    pub slug: UrlSegment,
    pub sort_order: i32,
    pub locale: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub title: NewsTitle,
    pub description: String,
    pub slug: UrlSegment,
    pub sort_order: i32,
    pub locale: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TagUpdate {
    pub id: TagId,
    pub title: Option<NewsTitle>,
    pub description: Option<String>,
    pub slug: Option<UrlSegment>,
    pub sort_order: Option<i32>,
    pub locale: Option<Option<String>>,
}

impl TagUpdate {
    pub fn new(id: TagId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            slug: None,
            sort_order: None,
            locale: None,
        }
    }

    pub fn with_title(mut self, title: NewsTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_slug(mut self, slug: UrlSegment) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = Some(locale);
        self
    }
}
