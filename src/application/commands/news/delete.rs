// src/application/commands/news/delete.rs
use super::{capability::ensure_capability, service::NewsCommandService};
use crate::{
    application::{dto::AuthenticatedMember, error::ApplicationResult},
    domain::news::NewsItemId,
};

pub struct DeleteNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    /// Cascade behavior (comments, tag links) is the store's concern; rename
    /// history is deliberately left in place.
    pub async fn delete_news(
        &self,
        actor: &AuthenticatedMember,
        command: DeleteNewsCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "news", "delete")?;
        let id = NewsItemId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
