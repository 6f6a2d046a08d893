//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that resolves the caller and injects it into extensions
//! - `RequireAuth` - Extractor that requires authentication
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, keeping it provider-agnostic.
//! The hosted auth API in production, a mock in tests; the middleware doesn't change.
//!
//! ```text
//! Request → auth_middleware → injects Caller into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//!
//! let auth = AuthState::new(Arc::new(MockSessionValidator::new()), "okit-boost-session");
//!
//! let app = Router::new()
//!     .route("/user/trial-requests", get(handler))
//!     .layer(middleware::from_fn_with_state(auth, auth_middleware));
//!
//! async fn handler(RequireAuth(caller): RequireAuth) -> String {
//!     format!("Bonjour, {}!", caller.user.id)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::ErrorResponse;
use crate::domain::constants::messages;
use crate::domain::foundation::{AuthError, Caller};
use crate::ports::SessionValidator;

/// Auth middleware state - the session validator and the cookie it reads.
#[derive(Clone)]
pub struct AuthState {
    validator: Arc<dyn SessionValidator>,
    session_cookie: String,
}

impl AuthState {
    pub fn new(validator: Arc<dyn SessionValidator>, session_cookie: impl Into<String>) -> Self {
        Self {
            validator,
            session_cookie: session_cookie.into(),
        }
    }
}

/// Finds the access token: `Authorization: Bearer` first, then the session cookie.
pub fn extract_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value)
}

/// Authentication middleware.
///
/// This middleware:
/// 1. Extracts the token from the Authorization header or the session cookie
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects the `Caller` (user and token) into request extensions
/// 4. On missing, invalid or expired token, continues unauthenticated
///
/// Routes that need a caller enforce it with `RequireAuth`.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = extract_token(request.headers(), &auth.session_cookie).map(str::to_owned);

    if let Some(token) = token {
        let validated = auth.validator.validate(&token).await;
        match validated {
            Ok(user) => {
                request.extensions_mut().insert(Caller::new(user, token));
            }
            Err(AuthError::ServiceUnavailable(msg)) => {
                tracing::error!("Auth service unavailable: {}", msg);
            }
            Err(e) => {
                tracing::debug!("Ignoring session token: {}", e);
            }
        }
    }

    next.run(request).await
}

/// Extractor that requires authentication.
///
/// Use this extractor in handlers that require an authenticated user.
/// If no user is in the request extensions (i.e., auth middleware didn't
/// successfully validate a token), returns 401 Unauthorized.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(caller): RequireAuth) -> impl IntoResponse {
///     format!("Bonjour, {}!", caller.user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Caller);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Caller>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(messages::UNAUTHORIZED)),
            )
                .into_response(),
        }
    }
}
