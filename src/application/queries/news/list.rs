// src/application/queries/news/list.rs
use super::service::NewsQueryService;
use crate::application::{
    dto::{AuthenticatedMember, NewsItemDto},
    error::ApplicationResult,
};

impl NewsQueryService {
    /// Newest publish-from first. Hidden items appear only for actors
    /// holding the view capability.
    pub async fn list_news(
        &self,
        actor: Option<&AuthenticatedMember>,
    ) -> ApplicationResult<Vec<NewsItemDto>> {
        let include_hidden =
            actor.is_some_and(|actor| actor.has_capability("news", "view"));
        let items = self.read_repo.list(include_hidden).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
