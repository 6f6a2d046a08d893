//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_services_by_platform, CatalogHandlers};

pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/services/:platform", get(get_services_by_platform))
        .with_state(handlers)
}
