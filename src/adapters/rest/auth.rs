//! Hosted auth API adapter.
//!
//! Implements `SessionValidator` by asking the auth service who a token
//! belongs to (`GET /auth/v1/user`), and `AuthCodeExchanger` with the PKCE
//! code exchange (`POST /auth/v1/token?grant_type=pkce`).

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::json;

use super::client::RestClient;
use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser, UserId};
use crate::ports::{AuthCodeExchanger, SessionValidator};

/// User object returned by the auth API.
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl AuthUser {
    fn into_domain(self) -> Result<AuthenticatedUser, AuthError> {
        let id = UserId::new(self.id).map_err(|_| {
            tracing::warn!("Auth service returned a user without id");
            AuthError::InvalidToken
        })?;
        let display_name = self.user_metadata.full_name.or(self.user_metadata.name);
        Ok(AuthenticatedUser::new(
            id,
            self.email,
            display_name,
            self.email_confirmed_at.is_some(),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: u64,
    user: AuthUser,
}

/// Production `SessionValidator` and `AuthCodeExchanger`.
#[derive(Debug, Clone)]
pub struct RestAuthClient {
    client: RestClient,
}

impl RestAuthClient {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

fn unavailable(context: &str, e: impl std::fmt::Display) -> AuthError {
    tracing::error!("{}: {}", context, e);
    AuthError::service_unavailable(format!("{}: {}", context, e))
}

#[async_trait]
impl SessionValidator for RestAuthClient {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let response = self
            .client
            .auth_request(Method::GET, "user")
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| unavailable("Auth service unreachable", e))?;

        match response.status() {
            status if status.is_success() => {
                let user: AuthUser = response
                    .json()
                    .await
                    .map_err(|e| unavailable("Malformed auth user response", e))?;
                user.into_domain()
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!("Auth service rejected token");
                Err(AuthError::InvalidToken)
            }
            status => Err(unavailable("Auth service returned", status)),
        }
    }
}

#[async_trait]
impl AuthCodeExchanger for RestAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .auth_request(Method::POST, "token")
            .query(&[("grant_type", "pkce")])
            .json(&json!({ "auth_code": code }))
            .send()
            .await
            .map_err(|e| unavailable("Auth service unreachable", e))?;

        match response.status() {
            status if status.is_success() => {
                let token: TokenResponse = response
                    .json()
                    .await
                    .map_err(|e| unavailable("Malformed token response", e))?;
                Ok(AuthSession {
                    access_token: SecretString::new(token.access_token),
                    refresh_token: token.refresh_token.map(SecretString::new),
                    expires_in: token.expires_in,
                    user: token.user.into_domain()?,
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!("Auth service rejected authorization code");
                Err(AuthError::InvalidCode)
            }
            status => Err(unavailable("Auth service returned", status)),
        }
    }
}
