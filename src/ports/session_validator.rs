//! Session validation port.
//!
//! Resolves an access token to the current caller. The hosted auth service
//! owns token issuance and verification; implementations only ask it who the
//! token belongs to.
//!
//! # Example Implementation
//!
//! ```ignore
//! #[async_trait]
//! impl SessionValidator for RestAuthClient {
//!     async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
//!         // GET {base}/auth/v1/user with the token as bearer
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to resolve the bearer token or session cookie.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for unknown or rejected tokens
/// - Return `AuthError::TokenExpired` when the service reports expiry
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Exchanges an OAuth/magic-link authorization code for a session.
///
/// # Contract
///
/// - `AuthError::InvalidCode` when the service rejects the code
/// - `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait AuthCodeExchanger: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<AuthSession, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Simple mock implementation for testing the trait
    struct TestSessionValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    impl TestSessionValidator {
        fn new() -> Self {
            Self {
                tokens: RwLock::new(HashMap::new()),
            }
        }

        fn add_token(&self, token: &str, user: AuthenticatedUser) {
            self.tokens.write().unwrap().insert(token.to_string(), user);
        }
    }

    #[async_trait]
    impl SessionValidator for TestSessionValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn validator_returns_user_for_known_token() {
        let validator = TestSessionValidator::new();
        validator.add_token(
            "good",
            AuthenticatedUser::new(UserId::new("user-1").unwrap(), None, None, false),
        );

        let user = validator.validate("good").await.unwrap();
        assert_eq!(user.id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn validator_rejects_unknown_token() {
        let validator = TestSessionValidator::new();
        assert_eq!(validator.validate("bad").await, Err(AuthError::InvalidToken));
    }

    #[test]
    fn ports_are_object_safe_and_send_sync() {
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn SessionValidator>>();
        _assert_arc_send_sync::<std::sync::Arc<dyn AuthCodeExchanger>>();
    }
}
