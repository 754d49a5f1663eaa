// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::UrlSegment, tag::TagRepository},
};

/// Tags carry no visibility flag; everything here is world-readable.
pub struct TagQueryService {
    repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Sort-order ascending.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.repo.list().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    pub async fn get_tag_by_slug(&self, slug: String) -> ApplicationResult<TagDto> {
        let slug = UrlSegment::new(slug)?;
        let tag = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        Ok(tag.into())
    }
}
