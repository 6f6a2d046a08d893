//! HTTP handler for the sign-in callback.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;

use crate::application::handlers::{CompleteSignInCommand, CompleteSignInHandler, SignInOutcome};
use crate::domain::foundation::AuthSession;

use super::dto::CallbackQuery;

#[derive(Clone)]
pub struct AuthCallbackHandlers {
    sign_in: Arc<CompleteSignInHandler>,
    public_origin: String,
    session_cookie: String,
    error_path: String,
}

impl AuthCallbackHandlers {
    pub fn new(
        sign_in: Arc<CompleteSignInHandler>,
        public_origin: impl Into<String>,
        session_cookie: impl Into<String>,
        error_path: impl Into<String>,
    ) -> Self {
        Self {
            sign_in,
            public_origin: public_origin.into(),
            session_cookie: session_cookie.into(),
            error_path: error_path.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.public_origin, path)
    }

    /// `Set-Cookie` value carrying the access token; `None` when the token
    /// is not a plain cookie value.
    fn session_cookie(&self, session: &AuthSession) -> Option<HeaderValue> {
        let token = session.access_token.expose_secret();
        if !is_cookie_value(token) {
            return None;
        }
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.session_cookie, token, session.expires_in
        );
        if self.public_origin.starts_with("https://") {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).ok()
    }
}

/// Cookie-octets only: printable ASCII without whitespace, `"`, `,`, `;` or `\`.
fn is_cookie_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\'))
}

/// GET /auth/callback - Exchange the code, set the session, redirect (307)
pub async fn auth_callback(
    State(handlers): State<AuthCallbackHandlers>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!("Malformed auth callback query: {}", rejection.body_text());
            return Redirect::temporary(&handlers.url(&handlers.error_path)).into_response();
        }
    };
    let cmd = CompleteSignInCommand {
        next: params.target(),
        code: params.code,
    };

    match handlers.sign_in.handle(cmd).await {
        SignInOutcome::SignedIn {
            session,
            redirect_path,
        } => match handlers.session_cookie(&session) {
            Some(cookie) => (
                [(header::SET_COOKIE, cookie)],
                Redirect::temporary(&handlers.url(&redirect_path)),
            )
                .into_response(),
            None => {
                tracing::error!("Refusing to set a session cookie from an unsafe access token");
                Redirect::temporary(&handlers.url(&handlers.error_path)).into_response()
            }
        },
        SignInOutcome::Failed { redirect_path } => {
            Redirect::temporary(&handlers.url(&redirect_path)).into_response()
        }
    }
}
