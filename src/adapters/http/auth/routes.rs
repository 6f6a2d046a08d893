//! HTTP routes for sign-in.

use axum::{routing::get, Router};

use super::handlers::{auth_callback, AuthCallbackHandlers};

/// Creates the auth router, mounted at `/auth`.
pub fn auth_routes(handlers: AuthCallbackHandlers) -> Router {
    Router::new()
        .route("/callback", get(auth_callback))
        .with_state(handlers)
}
