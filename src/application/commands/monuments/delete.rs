use super::MonumentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::monument::MonumentId,
};

pub struct DeleteMonumentCommand {
    pub id: i64,
}

impl MonumentCommandService {
    pub async fn delete_monument(&self, command: DeleteMonumentCommand) -> ApplicationResult<()> {
        let id = MonumentId::new(command.id)
            .map_err(|err| ApplicationError::from_route_identifier(err, "monument"))?;
        self.write_repo.delete(id).await?;
        tracing::info!(%id, "monument deleted");
        Ok(())
    }
}
