//! Hosted backend configuration (table API + auth API)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Connection settings for the hosted Postgres-over-REST backend.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,

    /// Anonymous API key sent as `apikey` on every request
    pub api_key: SecretString,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: SecretString::new(api_key.into()),
            timeout_secs: default_timeout(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    ///
    /// In production, requires HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__URL"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if *environment == Environment::Production && !self.url.starts_with("https://") {
            return Err(ValidationError::BackendMustBeHttps);
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = BackendConfig::new("https://project.example.co/", "anon");
        assert_eq!(config.base_url(), "https://project.example.co");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_missing_url() {
        let config = BackendConfig::new("", "anon");
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_invalid_scheme() {
        let config = BackendConfig::new("ftp://project.example.co", "anon");
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBackendUrl)
        ));
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = BackendConfig::new("https://project.example.co", "");
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = BackendConfig::new("http://localhost:54321", "anon");
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::BackendMustBeHttps)
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = BackendConfig::new("https://project.example.co", "super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
