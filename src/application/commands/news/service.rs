// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{social::SocialNotifier, time::Clock},
    config::NewsConfig,
    domain::{
        author::AuthorRepository,
        holder::HolderRepository,
        news::{NewsReadRepository, NewsWriteRepository},
        slugging::UrlSegmentResolver,
    },
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) holder_repo: Arc<dyn HolderRepository>,
    pub(super) resolver: Arc<UrlSegmentResolver>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) config: NewsConfig,
    pub(super) notifier: Option<Arc<dyn SocialNotifier>>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        holder_repo: Arc<dyn HolderRepository>,
        resolver: Arc<UrlSegmentResolver>,
        clock: Arc<dyn Clock>,
        config: NewsConfig,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            holder_repo,
            resolver,
            clock,
            config,
            notifier: None,
        }
    }

    /// Presence-detected social hook; absent by default.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn SocialNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}
