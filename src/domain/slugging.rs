// src/domain/slugging.rs
//! URL-segment resolution shared by news items and tags.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::news::value_objects::{UrlSegment, PAGINATION_MARKER};

/// Uniqueness check scoped to one entity's table, excluding the entity
/// itself. Backed by a repository query; failures propagate and abort the
/// save rather than risking a colliding segment.
#[async_trait]
pub trait SlugUniquenessProbe: Send + Sync {
    async fn is_taken(&self, candidate: &str) -> DomainResult<bool>;
}

/// Decides whether the resolver runs on this save: the segment is still
/// empty, or the title changed while the segment was not manually
/// overridden.
pub fn needs_resolution(
    current: Option<&UrlSegment>,
    title_changed: bool,
    segment_overridden: bool,
) -> bool {
    current.is_none() || (title_changed && !segment_overridden)
}

/// Derives unique URL segments from titles.
pub struct UrlSegmentResolver {
    generator: Arc<dyn SlugGenerator>,
}

impl UrlSegmentResolver {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Resolve a title to a unique segment.
    ///
    /// Segments carrying the `page-` marker are accepted verbatim, collisions
    /// included. That is the documented legacy escape hatch for the host
    /// framework's `page-<id>` fallback segments, not a bug to fix.
    pub async fn resolve(
        &self,
        title: &str,
        probe: &dyn SlugUniquenessProbe,
    ) -> DomainResult<UrlSegment> {
        let mut base = self.generator.slugify(title);
        if base.is_empty() {
            base = format!("{PAGINATION_MARKER}{}", Utc::now().timestamp());
        }

        if base.contains(PAGINATION_MARKER) {
            return UrlSegment::new(base);
        }

        let mut candidate = base.clone();
        let mut counter = 1u32;
        while probe.is_taken(&candidate).await? {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
        UrlSegment::new(candidate)
    }
}
