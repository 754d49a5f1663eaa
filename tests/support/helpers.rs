// tests/support/helpers.rs
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use newsdesk_core::application::commands::news::NewsCommandService;
use newsdesk_core::application::commands::tags::TagCommandService;
use newsdesk_core::application::dto::AuthenticatedMember;
use newsdesk_core::application::ports::social::SocialNotifier;
use newsdesk_core::application::queries::news::NewsQueryService;
use newsdesk_core::application::queries::tags::TagQueryService;
use newsdesk_core::config::NewsConfig;
use newsdesk_core::domain::member::{news_admin_capabilities, MemberId};
use newsdesk_core::domain::slugging::UrlSegmentResolver;
use newsdesk_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{
    FixedClock, InMemoryAuthorRepo, InMemoryCommentRepo, InMemoryHolderRepo, InMemoryNewsStore,
    InMemoryTagRepo,
};

/// A member holding the full news-admin capability set.
pub fn admin() -> AuthenticatedMember {
    AuthenticatedMember {
        id: MemberId::new(1).unwrap(),
        display_name: "Site Admin".into(),
        capabilities: news_admin_capabilities(),
    }
}

/// A member with no capabilities at all.
pub fn visitor() -> AuthenticatedMember {
    AuthenticatedMember {
        id: MemberId::new(2).unwrap(),
        display_name: "Visitor".into(),
        capabilities: HashSet::new(),
    }
}

/// All the in-memory stores one test scenario shares, plus service wiring.
pub struct TestWorld {
    pub store: Arc<InMemoryNewsStore>,
    pub authors: Arc<InMemoryAuthorRepo>,
    pub holders: Arc<InMemoryHolderRepo>,
    pub comments: Arc<InMemoryCommentRepo>,
    pub tags: Arc<InMemoryTagRepo>,
    pub config: NewsConfig,
}

impl TestWorld {
    /// One holder page is seeded; most scenarios need exactly that.
    pub fn new() -> Self {
        let holders = Arc::new(InMemoryHolderRepo::new());
        holders.add_page("News", "news");
        Self {
            store: Arc::new(InMemoryNewsStore::new()),
            authors: Arc::new(InMemoryAuthorRepo::new()),
            holders,
            comments: Arc::new(InMemoryCommentRepo::new()),
            tags: Arc::new(InMemoryTagRepo::new()),
            config: NewsConfig::with_defaults(),
        }
    }

    pub fn without_holders() -> Self {
        let mut world = Self::new();
        world.holders = Arc::new(InMemoryHolderRepo::new());
        world
    }

    fn resolver() -> Arc<UrlSegmentResolver> {
        Arc::new(UrlSegmentResolver::new(Arc::new(DefaultSlugGenerator)))
    }

    pub fn news_service(&self) -> NewsCommandService {
        NewsCommandService::new(
            self.store.clone(),
            self.store.clone(),
            self.authors.clone(),
            self.holders.clone(),
            Self::resolver(),
            Arc::new(FixedClock),
            self.config.clone(),
        )
    }

    pub fn news_service_with_notifier(
        &self,
        notifier: Arc<dyn SocialNotifier>,
    ) -> NewsCommandService {
        self.news_service().with_notifier(notifier)
    }

    pub fn news_queries(&self) -> NewsQueryService {
        NewsQueryService::new(
            self.store.clone(),
            self.store.clone(),
            self.comments.clone(),
        )
    }

    pub fn tag_service(&self) -> TagCommandService {
        TagCommandService::new(self.tags.clone(), Self::resolver())
    }

    pub fn tag_queries(&self) -> TagQueryService {
        TagQueryService::new(self.tags.clone())
    }
}
