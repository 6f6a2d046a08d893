//! Authentication callback configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::constants::{AUTH_ERROR_PATH, SESSION_COOKIE_NAME};

/// Settings for the auth callback route and the session cookie.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Public origin of the storefront, used to build redirect targets
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Name of the cookie carrying the access token
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Where to send the browser when the code exchange fails
    #[serde(default = "default_error_path")]
    pub error_path: String,
}

impl AuthConfig {
    /// Public origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.public_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.public_url.starts_with("http://") && !self.public_url.starts_with("https://") {
            return Err(ValidationError::InvalidPublicUrl);
        }
        if !self.error_path.starts_with('/') {
            return Err(ValidationError::InvalidErrorPath);
        }
        let cookie_ok = !self.session_cookie.is_empty()
            && self
                .session_cookie
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !cookie_ok {
            return Err(ValidationError::InvalidCookieName);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
            session_cookie: default_session_cookie(),
            error_path: default_error_path(),
        }
    }
}

fn default_public_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_session_cookie() -> String {
    SESSION_COOKIE_NAME.to_string()
}

fn default_error_path() -> String {
    AUTH_ERROR_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie, "okit-boost-session");
        assert_eq!(config.error_path, "/auth/auth-code-error");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_origin_strips_trailing_slash() {
        let config = AuthConfig {
            public_url: "https://okit-boost.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "https://okit-boost.example.com");
    }

    #[test]
    fn test_validation_rejects_relative_public_url() {
        let config = AuthConfig {
            public_url: "okit-boost.example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPublicUrl)
        ));
    }

    #[test]
    fn test_validation_rejects_bad_cookie_name() {
        let config = AuthConfig {
            session_cookie: "session; Path=/".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCookieName)
        ));
    }

    #[test]
    fn test_validation_rejects_relative_error_path() {
        let config = AuthConfig {
            error_path: "auth/error".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
