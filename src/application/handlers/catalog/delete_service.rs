//! DeleteServiceHandler - Command handler behind `DELETE /admin/services/{id}`.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ServiceId};
use crate::ports::CatalogRepository;

#[derive(Debug, Clone)]
pub struct DeleteServiceCommand {
    pub service_id: ServiceId,
}

pub struct DeleteServiceHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl DeleteServiceHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Deleting an id that does not exist succeeds.
    pub async fn handle(&self, cmd: DeleteServiceCommand) -> Result<(), DomainError> {
        self.catalog.delete_service(&cmd.service_id).await?;
        tracing::info!(service_id = %cmd.service_id, "Service deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogRepository;
    use crate::application::handlers::fixtures::service;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn removes_row_and_tolerates_missing_id() {
        let repo = Arc::new(
            InMemoryCatalogRepository::new()
                .with_service(service("s-1", "p-1", dec!(5), dec!(12500))),
        );
        let handler = DeleteServiceHandler::new(repo.clone());

        handler
            .handle(DeleteServiceCommand {
                service_id: ServiceId::new("s-1").unwrap(),
            })
            .await
            .unwrap();
        handler
            .handle(DeleteServiceCommand {
                service_id: ServiceId::new("s-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(repo.service_count(), 0);
    }
}
