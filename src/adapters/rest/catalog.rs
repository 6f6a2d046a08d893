//! `CatalogRepository` over the hosted `platforms` and `services` tables.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{Order, RestClient};
use crate::domain::catalog::{NewService, Platform, Service, ServiceUpdate};
use crate::domain::foundation::{Caller, DomainError, PlatformId, ServiceId};
use crate::ports::CatalogRepository;

const PLATFORMS: &str = "platforms";
const SERVICES: &str = "services";

#[derive(Debug, Clone)]
pub struct RestCatalogRepository {
    client: RestClient,
}

impl RestCatalogRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogRepository for RestCatalogRepository {
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn CatalogRepository> {
        Arc::new(Self::new(self.client.with_access_token(&caller.access_token)))
    }

    async fn find_platform_by_slug(&self, slug: &str) -> Result<Option<Platform>, DomainError> {
        self.client
            .table(PLATFORMS)
            .eq("slug", slug)
            .select_one()
            .await
    }

    async fn list_platforms(&self) -> Result<Vec<Platform>, DomainError> {
        self.client
            .table(PLATFORMS)
            .eq("is_active", "true")
            .order("name", Order::Asc)
            .select()
            .await
    }

    async fn list_services_for_platform(
        &self,
        platform_id: &PlatformId,
    ) -> Result<Vec<Service>, DomainError> {
        self.client
            .table(SERVICES)
            .eq("platform_id", platform_id)
            .eq("is_active", "true")
            .order("price_usd", Order::Asc)
            .select()
            .await
    }

    async fn create_service(&self, service: &NewService) -> Result<Service, DomainError> {
        self.client.table(SERVICES).insert(service).await
    }

    async fn update_service(
        &self,
        id: &ServiceId,
        update: &ServiceUpdate,
    ) -> Result<Option<Service>, DomainError> {
        let rows: Vec<Service> = self.client.table(SERVICES).eq("id", id).update(update).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete_service(&self, id: &ServiceId) -> Result<(), DomainError> {
        self.client.table(SERVICES).eq("id", id).delete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use httpmock::prelude::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn repo(server: &MockServer) -> RestCatalogRepository {
        let client = RestClient::new(&BackendConfig::new(server.base_url(), "anon-key")).unwrap();
        RestCatalogRepository::new(client)
    }

    fn service_row(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "platform_id": "p-tiktok",
            "name": "1000 Followers",
            "description": null,
            "category": "followers",
            "quantity": 1000,
            "price_usd": 5.0,
            "price_cdf": 12500,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00+00:00"
        })
    }

    #[tokio::test]
    async fn find_platform_by_slug_returns_none_when_empty() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/platforms")
                .query_param("slug", "eq.unknown");
            then.status(200).json_body(json!([]));
        });

        let platform = repo(&server).find_platform_by_slug("unknown").await.unwrap();

        mock.assert();
        assert!(platform.is_none());
    }

    #[tokio::test]
    async fn services_are_filtered_by_platform_and_ordered_by_price() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/services")
                .query_param("platform_id", "eq.p-tiktok")
                .query_param("is_active", "eq.true")
                .query_param("order", "price_usd.asc");
            then.status(200).json_body(json!([service_row("s-1")]));
        });

        let services = repo(&server)
            .list_services_for_platform(&PlatformId::new("p-tiktok").unwrap())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].price_usd, dec!(5));
        assert_eq!(services[0].price_cdf, dec!(12500));
    }

    #[tokio::test]
    async fn update_sends_only_present_fields() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/rest/v1/services")
                .query_param("id", "eq.s-1")
                .json_body(json!({"is_active": false}));
            then.status(200).json_body(json!([service_row("s-1")]));
        });

        let update = ServiceUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let updated = repo(&server)
            .update_service(&ServiceId::new("s-1").unwrap(), &update)
            .await
            .unwrap();

        mock.assert();
        assert!(updated.is_some());
    }

    #[tokio::test]
    async fn update_of_missing_row_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::PATCH).path("/rest/v1/services");
            then.status(200).json_body(json!([]));
        });

        let updated = repo(&server)
            .update_service(&ServiceId::new("ghost").unwrap(), &ServiceUpdate::default())
            .await
            .unwrap();

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn delete_targets_single_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/rest/v1/services")
                .query_param("id", "eq.s-1");
            then.status(204);
        });

        repo(&server)
            .delete_service(&ServiceId::new("s-1").unwrap())
            .await
            .unwrap();

        mock.assert();
    }
}
