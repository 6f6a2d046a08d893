//! GetServicesByPlatformHandler - Query handler behind `GET /services/{platform}`.
//!
//! Resolves the platform by slug, then lists its active services ordered by
//! USD price.

use std::sync::Arc;

use crate::domain::catalog::Service;
use crate::domain::constants::messages;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogRepository;

/// Query for the services of one platform.
#[derive(Debug, Clone)]
pub struct GetServicesByPlatformQuery {
    /// Platform slug as it appears in the URL.
    pub platform_slug: String,
}

pub struct GetServicesByPlatformHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl GetServicesByPlatformHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: GetServicesByPlatformQuery,
    ) -> Result<Vec<Service>, DomainError> {
        let platform = self
            .catalog
            .find_platform_by_slug(&query.platform_slug)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(messages::PLATFORM_NOT_FOUND)
                    .with_detail("slug", query.platform_slug.clone())
            })?;

        self.catalog.list_services_for_platform(&platform.id).await
    }
}
