// src/application/queries/news/history.rs
use super::service::NewsQueryService;
use crate::{
    application::{
        dto::{AuthenticatedMember, RenameRecordDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsItemId,
};

impl NewsQueryService {
    /// Rename history for one item, newest first. Admin-facing.
    pub async fn list_renames(
        &self,
        actor: &AuthenticatedMember,
        news_id: i64,
    ) -> ApplicationResult<Vec<RenameRecordDto>> {
        if !actor.has_capability("news", "view") {
            return Err(ApplicationError::forbidden("missing capability news:view"));
        }
        let id = NewsItemId::new(news_id)?;
        let records = self.rename_repo.list_for(id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
