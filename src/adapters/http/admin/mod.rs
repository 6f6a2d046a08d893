//! HTTP adapter for the back-office endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::TrialRequestsQuery;
pub use handlers::AdminHandlers;
pub use routes::admin_routes;
