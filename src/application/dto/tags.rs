use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub sort_order: i32,
    pub locale: Option<String>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            title: tag.title.into(),
            description: tag.description,
            slug: tag.slug.into(),
            sort_order: tag.sort_order,
            locale: tag.locale,
        }
    }
}
