//! HTTP routes for account endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_my_trial_requests, AccountHandlers};

/// Creates the account router, mounted at `/user`.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/trial-requests", get(list_my_trial_requests))
        .with_state(handlers)
}
