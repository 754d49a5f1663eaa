// src/application/ports/social.rs
use crate::domain::errors::DomainResult;
use crate::domain::news::NewsItem;
use async_trait::async_trait;

/// Optional auto-posting hook (Twitter/Facebook style). Invoked strictly
/// after a successful save, and only once per item: the posted flag is
/// latched within the save write itself.
#[async_trait]
pub trait SocialNotifier: Send + Sync {
    async fn publish(&self, item: &NewsItem) -> DomainResult<()>;
}
