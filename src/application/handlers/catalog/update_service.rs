//! UpdateServiceHandler - Command handler behind `PATCH /admin/services/{id}`.

use std::sync::Arc;

use crate::domain::catalog::{Service, ServiceUpdate};
use crate::domain::constants::messages;
use crate::domain::foundation::{DomainError, ServiceId};
use crate::ports::CatalogRepository;

/// Command carrying a partial update of one service.
#[derive(Debug, Clone)]
pub struct UpdateServiceCommand {
    pub service_id: ServiceId,
    pub update: ServiceUpdate,
}

pub struct UpdateServiceHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl UpdateServiceHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Returns the updated row, or `NotFound` if no service has this id.
    pub async fn handle(&self, cmd: UpdateServiceCommand) -> Result<Service, DomainError> {
        self.catalog
            .update_service(&cmd.service_id, &cmd.update)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(messages::SERVICE_NOT_FOUND)
                    .with_detail("service_id", cmd.service_id.to_string())
            })
    }
}
