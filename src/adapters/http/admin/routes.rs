//! HTTP routes for admin endpoints.

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};

use super::handlers::{
    delete_service, delete_trial_request, list_trial_requests, update_service,
    update_trial_request, AdminHandlers,
};
use crate::adapters::http::middleware::{require_admin, AdminGate};

/// Creates the admin router, mounted at `/admin`. Every route sits behind
/// the admin gate.
pub fn admin_routes(handlers: AdminHandlers, gate: AdminGate) -> Router {
    Router::new()
        .route("/services/:id", patch(update_service).delete(delete_service))
        .route("/trial-requests", get(list_trial_requests))
        .route(
            "/trial-requests/:id",
            patch(update_trial_request).delete(delete_trial_request),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_admin))
        .with_state(handlers)
}
