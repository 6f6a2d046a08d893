//! CatalogRepository port for the `platforms` and `services` tables.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::{NewService, Platform, Service, ServiceUpdate};
use crate::domain::foundation::{Caller, DomainError, PlatformId, ServiceId};

/// Read and write access to platforms and services.
///
/// # Contract
///
/// - Missing rows are `Ok(None)`, never an error
/// - Backend failures are `DomainError` with `ErrorCode::UpstreamFailure`
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// This repository acting for `caller`, so row-level policies apply to them.
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn CatalogRepository>;

    /// Find a platform by its URL slug.
    async fn find_platform_by_slug(&self, slug: &str) -> Result<Option<Platform>, DomainError>;

    /// Active platforms, ordered by name.
    async fn list_platforms(&self) -> Result<Vec<Platform>, DomainError>;

    /// Active services of a platform, ordered by USD price.
    async fn list_services_for_platform(
        &self,
        platform_id: &PlatformId,
    ) -> Result<Vec<Service>, DomainError>;

    async fn create_service(&self, service: &NewService) -> Result<Service, DomainError>;

    /// Apply a partial update; `None` if no row has this id.
    async fn update_service(
        &self,
        id: &ServiceId,
        update: &ServiceUpdate,
    ) -> Result<Option<Service>, DomainError>;

    /// Delete a service. Deleting a missing id succeeds.
    async fn delete_service(&self, id: &ServiceId) -> Result<(), DomainError>;
}
