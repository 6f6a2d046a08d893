//! CreateServiceHandler - Command handler for adding a service to the catalog.

use std::sync::Arc;

use crate::domain::catalog::{NewService, Service};
use crate::domain::foundation::DomainError;
use crate::ports::CatalogRepository;

/// Command to insert a service row.
#[derive(Debug, Clone)]
pub struct CreateServiceCommand {
    pub service: NewService,
}

pub struct CreateServiceHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl CreateServiceHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: CreateServiceCommand) -> Result<Service, DomainError> {
        let service = self.catalog.create_service(&cmd.service).await?;
        tracing::info!(service_id = %service.id, "Service created");
        Ok(service)
    }
}
