//! HTTP adapter for the public catalog.

mod handlers;
mod routes;

pub use handlers::CatalogHandlers;
pub use routes::catalog_routes;
