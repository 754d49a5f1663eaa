// src/application/commands/tags/delete.rs
use super::capability::ensure_capability;
use super::service::TagCommandService;
use crate::{
    application::{dto::AuthenticatedMember, error::ApplicationResult},
    domain::tag::TagId,
};

pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    pub async fn delete_tag(
        &self,
        actor: &AuthenticatedMember,
        command: DeleteTagCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "tags", "manage")?;
        let id = TagId::new(command.id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
