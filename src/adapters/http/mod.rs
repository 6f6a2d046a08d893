//! HTTP adapters - the storefront's route handlers.
//!
//! Each area has its own module (`dto`, `handlers`, `routes`); `app_router`
//! mounts them all behind the auth middleware. `/admin` routes also need a
//! caller with an admin profile (401 anonymous, 403 otherwise).
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | PATCH  | `/admin/services/:id` | `{success, data: Service}` |
//! | DELETE | `/admin/services/:id` | `{success}` |
//! | GET    | `/admin/trial-requests?status=` | `[TrialRequest]` |
//! | PATCH  | `/admin/trial-requests/:id` | `{success, data: TrialRequest}` |
//! | DELETE | `/admin/trial-requests/:id` | `{success}` |
//! | GET    | `/services/:platform` | `[Service]` |
//! | GET    | `/user/trial-requests` | `[TrialRequest]` (session required) |
//! | GET    | `/auth/callback?code=&next=` | 307 redirect |

pub mod account;
pub mod admin;
pub mod auth;
pub mod catalog;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod state;

pub use dto::{ErrorResponse, SuccessResponse};
pub use error::ApiError;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use state::AppState;

use axum::Router;

/// Builds the full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/admin",
            admin::admin_routes(state.admin_handlers(), state.admin_gate()),
        )
        .nest("/user", account::account_routes(state.account_handlers()))
        .nest("/auth", auth::auth_routes(state.auth_callback_handlers()))
        .merge(catalog::catalog_routes(state.catalog_handlers()))
        .layer(axum::middleware::from_fn_with_state(
            state.auth_state(),
            auth_middleware,
        ))
}
