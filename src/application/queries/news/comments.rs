// src/application/queries/news/comments.rs
use super::service::NewsQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsItemId,
};

impl NewsQueryService {
    /// Visible (non-spam) comments for an item. Items saved with commenting
    /// disabled simply report none.
    pub async fn list_comments(&self, news_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let id = NewsItemId::new(news_id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        if !item.commenting {
            return Ok(Vec::new());
        }
        let comments = self.comment_repo.list_visible_for(id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
