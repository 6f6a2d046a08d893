//! Admin gate for the back-office routes.
//!
//! Runs after `auth_middleware`: no caller is a 401, a caller without an
//! admin profile is a 403.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::auth::AuthRejection;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::{RequireAdminHandler, RequireAdminQuery};
use crate::domain::constants::messages;
use crate::domain::foundation::Caller;
use crate::ports::ProfileReader;

#[derive(Clone)]
pub struct AdminGate {
    profiles: Arc<dyn ProfileReader>,
}

impl AdminGate {
    pub fn new(profiles: Arc<dyn ProfileReader>) -> Self {
        Self { profiles }
    }
}

pub async fn require_admin(State(gate): State<AdminGate>, request: Request, next: Next) -> Response {
    let Some(caller) = request.extensions().get::<Caller>().cloned() else {
        return AuthRejection::Unauthenticated.into_response();
    };

    let handler = RequireAdminHandler::new(gate.profiles.clone().for_caller(&caller));
    let query = RequireAdminQuery {
        user_id: caller.id().clone(),
    };
    match handler.handle(query).await {
        Ok(_) => next.run(request).await,
        Err(e) => ApiError::from_domain(e, messages::SERVER_ERROR).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::adapters::memory::InMemoryProfileReader;
    use crate::domain::foundation::{DomainError, Timestamp, UserId};
    use crate::domain::user::{Profile, UserRole};
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn profile(id: &str, role: UserRole) -> Profile {
        Profile {
            id: UserId::new(id).unwrap(),
            email: None,
            full_name: None,
            phone: None,
            role,
            created_at: Timestamp::now(),
        }
    }

    fn app(profiles: InMemoryProfileReader) -> Router {
        let validator = MockSessionValidator::new()
            .with_test_user("admin-token", "u-admin")
            .with_test_user("user-token", "u-1");
        let auth = AuthState::new(Arc::new(validator), "okit-boost-session");
        let gate = AdminGate::new(Arc::new(profiles));

        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(gate, require_admin))
            .layer(middleware::from_fn_with_state(auth, auth_middleware))
    }

    fn profiles() -> InMemoryProfileReader {
        InMemoryProfileReader::new()
            .with_profile(profile("u-admin", UserRole::Admin))
            .with_profile(profile("u-1", UserRole::User))
    }

    async fn get_secret(app: Router, token: Option<&str>) -> StatusCode {
        let mut request = HttpRequest::builder().uri("/secret");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn anonymous_is_401() {
        assert_eq!(get_secret(app(profiles()), None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn customer_is_403() {
        assert_eq!(
            get_secret(app(profiles()), Some("user-token")).await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn admin_passes() {
        assert_eq!(
            get_secret(app(profiles()), Some("admin-token")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn unreadable_profiles_are_500() {
        let broken = profiles().with_error(DomainError::upstream("down"));
        assert_eq!(
            get_secret(app(broken), Some("admin-token")).await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
