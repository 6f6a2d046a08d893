//! HTTP adapter for the customer account area.

mod handlers;
mod routes;

pub use handlers::AccountHandlers;
pub use routes::account_routes;
