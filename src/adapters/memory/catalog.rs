//! In-memory catalog repository.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::lock_poisoned;
use crate::domain::catalog::{NewService, Platform, Service, ServiceUpdate};
use crate::domain::foundation::{Caller, DomainError, PlatformId, ServiceId, Timestamp};
use crate::ports::CatalogRepository;

/// In-memory `platforms` and `services` tables.
///
/// Supports forcing an error on every call to exercise upstream-failure paths.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    platforms: RwLock<Vec<Platform>>,
    services: RwLock<Vec<Service>>,
    force_error: RwLock<Option<DomainError>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a platform row.
    pub fn with_platform(self, platform: Platform) -> Self {
        if let Ok(mut platforms) = self.platforms.write() {
            platforms.push(platform);
        }
        self
    }

    /// Seed a service row.
    pub fn with_service(self, service: Service) -> Self {
        if let Ok(mut services) = self.services.write() {
            services.push(service);
        }
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: DomainError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Returns the number of stored services.
    pub fn service_count(&self) -> usize {
        self.services.read().map(|s| s.len()).unwrap_or(0)
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.force_error.read().map_err(|_| lock_poisoned())?.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    fn for_caller(self: Arc<Self>, _caller: &Caller) -> Arc<dyn CatalogRepository> {
        self
    }

    async fn find_platform_by_slug(&self, slug: &str) -> Result<Option<Platform>, DomainError> {
        self.check()?;
        let platforms = self.platforms.read().map_err(|_| lock_poisoned())?;
        Ok(platforms.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_platforms(&self) -> Result<Vec<Platform>, DomainError> {
        self.check()?;
        let mut platforms: Vec<Platform> = self
            .platforms
            .read()
            .map_err(|_| lock_poisoned())?
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        platforms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(platforms)
    }

    async fn list_services_for_platform(
        &self,
        platform_id: &PlatformId,
    ) -> Result<Vec<Service>, DomainError> {
        self.check()?;
        let mut services: Vec<Service> = self
            .services
            .read()
            .map_err(|_| lock_poisoned())?
            .iter()
            .filter(|s| &s.platform_id == platform_id && s.is_active)
            .cloned()
            .collect();
        services.sort_by(|a, b| a.price_usd.cmp(&b.price_usd));
        Ok(services)
    }

    async fn create_service(&self, service: &NewService) -> Result<Service, DomainError> {
        self.check()?;
        let row = Service {
            id: ServiceId::generate(),
            platform_id: service.platform_id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            category: service.category.clone(),
            quantity: service.quantity,
            price_usd: service.price_usd,
            price_cdf: service.price_cdf,
            is_active: service.is_active,
            created_at: Timestamp::now(),
        };
        self.services
            .write()
            .map_err(|_| lock_poisoned())?
            .push(row.clone());
        Ok(row)
    }

    async fn update_service(
        &self,
        id: &ServiceId,
        update: &ServiceUpdate,
    ) -> Result<Option<Service>, DomainError> {
        self.check()?;
        let mut services = self.services.write().map_err(|_| lock_poisoned())?;
        Ok(services.iter_mut().find(|s| &s.id == id).map(|service| {
            update.apply_to(service);
            service.clone()
        }))
    }

    async fn delete_service(&self, id: &ServiceId) -> Result<(), DomainError> {
        self.check()?;
        self.services
            .write()
            .map_err(|_| lock_poisoned())?
            .retain(|s| &s.id != id);
        Ok(())
    }
}
