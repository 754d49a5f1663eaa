// src/application/commands/tags/service.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    errors::DomainResult,
    slugging::{SlugUniquenessProbe, UrlSegmentResolver},
    tag::{TagId, TagRepository},
};

pub struct TagCommandService {
    pub(super) repo: Arc<dyn TagRepository>,
    pub(super) resolver: Arc<UrlSegmentResolver>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>, resolver: Arc<UrlSegmentResolver>) -> Self {
        Self { repo, resolver }
    }
}

/// Uniqueness probe over the tag table, excluding the tag being saved.
pub(super) struct TagSlugProbe<'a> {
    pub repo: &'a dyn TagRepository,
    pub exclude: Option<TagId>,
}

#[async_trait]
impl SlugUniquenessProbe for TagSlugProbe<'_> {
    async fn is_taken(&self, candidate: &str) -> DomainResult<bool> {
        self.repo.slug_in_use(candidate, self.exclude).await
    }
}
