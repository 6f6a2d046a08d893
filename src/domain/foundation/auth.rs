//! Authentication types for the domain layer.
//!
//! These types represent the caller as resolved by the hosted auth service.
//! They have **no provider dependencies**: any adapter implementing the
//! `SessionValidator` / `AuthCodeExchanger` ports can populate them.

use secrecy::SecretString;
use thiserror::Error;

use super::UserId;

/// Authenticated user resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth service.
    pub id: UserId,

    /// Email address, when the account has one (phone sign-ups may not).
    pub email: Option<String>,

    /// Display name from the user metadata, if set.
    pub display_name: Option<String>,

    /// Whether the email has been confirmed.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(
        id: UserId,
        email: Option<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            email_verified,
        }
    }
}

/// The caller of one request: who they are and the access token they sent.
///
/// The token is forwarded to the hosted backend so its row policies see
/// the real user.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user: AuthenticatedUser,
    pub access_token: SecretString,
}

impl Caller {
    pub fn new(user: AuthenticatedUser, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: SecretString::new(access_token.into()),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.user.id
    }
}

/// A session issued by the auth service after a code exchange.
#[derive(Debug)]
pub struct AuthSession {
    pub access_token: SecretString,
    pub refresh_token: Option<SecretString>,
    /// Lifetime of the access token, in seconds.
    pub expires_in: u64,
    pub user: AuthenticatedUser,
}

/// Authentication errors.
///
/// These are **domain-centric**: they describe what went wrong from the
/// application's perspective, not the provider's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or was rejected.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The authorization code was rejected during exchange.
    #[error("Invalid authorization code")]
    InvalidCode,

    /// The auth service is unreachable or answered unexpectedly.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
