//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator` and `AuthCodeExchanger`
//! ports without calling the hosted auth service.
//!
//! # Example
//!
//! ```ignore
//! use okit_boost::adapters::auth::{MockAuthCodeExchanger, MockSessionValidator};
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", "user-123");
//! let exchanger = MockAuthCodeExchanger::new().with_code("code-1", "valid-token", "user-123");
//!
//! let session = exchanger.exchange_code("code-1").await?;
//! let user = validator.validate("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser, UserId};
use crate::ports::{AuthCodeExchanger, SessionValidator};

fn test_user(user_id: &str) -> Result<AuthenticatedUser, AuthError> {
    let id = UserId::new(user_id).map_err(|_| AuthError::InvalidToken)?;
    Ok(AuthenticatedUser::new(
        id,
        Some(format!("{}@test.example.com", user_id)),
        Some(format!("Test User {}", user_id)),
        true,
    ))
}

/// Mock session validator.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
        self
    }

    /// Adds a valid token with a generated test user.
    pub fn with_test_user(self, token: impl Into<String>, user_id: &str) -> Self {
        match test_user(user_id) {
            Ok(user) => self.with_user(token, user),
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(token);
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.read().map(|t| t.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let poisoned = || AuthError::service_unavailable("mock lock poisoned");

        if let Some(error) = self.force_error.read().map_err(|_| poisoned())?.clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| poisoned())?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock code exchanger.
///
/// Maps authorization codes to the access token and user the session should
/// carry. Unknown codes return `InvalidCode`.
#[derive(Debug, Default)]
pub struct MockAuthCodeExchanger {
    codes: RwLock<HashMap<String, (String, AuthenticatedUser)>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockAuthCodeExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a code that exchanges into `access_token` for a test user.
    pub fn with_code(
        self,
        code: impl Into<String>,
        access_token: impl Into<String>,
        user_id: &str,
    ) -> Self {
        if let (Ok(user), Ok(mut codes)) = (test_user(user_id), self.codes.write()) {
            codes.insert(code.into(), (access_token.into(), user));
        }
        self
    }

    /// Forces all exchanges to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }
}

#[async_trait]
impl AuthCodeExchanger for MockAuthCodeExchanger {
    async fn exchange_code(&self, code: &str) -> Result<AuthSession, AuthError> {
        let poisoned = || AuthError::service_unavailable("mock lock poisoned");

        if let Some(error) = self.force_error.read().map_err(|_| poisoned())?.clone() {
            return Err(error);
        }

        let (token, user) = self
            .codes
            .read()
            .map_err(|_| poisoned())?
            .get(code)
            .cloned()
            .ok_or(AuthError::InvalidCode)?;

        Ok(AuthSession {
            access_token: SecretString::new(token),
            refresh_token: None,
            expires_in: 3600,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn validator_returns_user_for_registered_token() {
        let validator = MockSessionValidator::new().with_test_user("valid-token", "user-123");

        let user = validator.validate("valid-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("user-123@test.example.com"));
    }

    #[tokio::test]
    async fn validator_rejects_unknown_token() {
        let validator = MockSessionValidator::new();

        let result = validator.validate("unknown-token").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn validator_with_error_forces_error() {
        let validator = MockSessionValidator::new()
            .with_test_user("valid-token", "user-123")
            .with_error(AuthError::service_unavailable("down"));

        let result = validator.validate("valid-token").await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn removed_token_is_rejected() {
        let validator = MockSessionValidator::new().with_test_user("token", "user-1");
        assert!(validator.validate("token").await.is_ok());

        validator.remove_token("token");

        assert!(validator.validate("token").await.is_err());
        assert_eq!(validator.token_count(), 0);
    }

    #[tokio::test]
    async fn exchanger_issues_session_for_known_code() {
        let exchanger = MockAuthCodeExchanger::new().with_code("code-1", "access-1", "user-1");

        let session = exchanger.exchange_code("code-1").await.unwrap();

        assert_eq!(session.access_token.expose_secret(), "access-1");
        assert_eq!(session.user.id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn exchanger_rejects_unknown_code() {
        let exchanger = MockAuthCodeExchanger::new();

        let result = exchanger.exchange_code("nope").await;

        assert!(matches!(result, Err(AuthError::InvalidCode)));
    }
}
