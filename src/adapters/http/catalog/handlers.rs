//! HTTP handlers for storefront catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiPath;
use crate::application::handlers::{GetServicesByPlatformHandler, GetServicesByPlatformQuery};
use crate::domain::constants::messages;

#[derive(Clone)]
pub struct CatalogHandlers {
    get_services: Arc<GetServicesByPlatformHandler>,
}

impl CatalogHandlers {
    pub fn new(get_services: Arc<GetServicesByPlatformHandler>) -> Self {
        Self { get_services }
    }
}

/// GET /services/:platform - Active services of a platform, cheapest first
pub async fn get_services_by_platform(
    State(handlers): State<CatalogHandlers>,
    ApiPath(platform_slug): ApiPath<String>,
) -> Response {
    let query = GetServicesByPlatformQuery { platform_slug };

    match handlers.get_services.handle(query).await {
        Ok(services) => Json(services).into_response(),
        Err(e) => ApiError::from_domain(e, messages::FETCH_SERVICES_FAILED).into_response(),
    }
}
