//! Configuration for the storefront client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production storefront API URL
const DEFAULT_STORE_URL: &str = "https://api.kiosk-apps.dev/store/v1";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (emulator backend)
    Development,
    /// Production environment
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Production
    }
}

impl Environment {
    /// Parse from environment variable
    pub fn from_env() -> Self {
        match env::var("KIOSK_STORE_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" | "local" => Self::Development,
            _ => Self::Production,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL for the storefront document API
    pub base_url: String,
    /// Public API key sent with every request
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Current environment
    pub environment: Environment,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
            environment: Environment::default(),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `KIOSK_STORE_URL`: Base URL for the document API
    /// - `KIOSK_STORE_API_KEY`: Public API key
    /// - `KIOSK_STORE_ENV`: Environment (development/production)
    /// - `KIOSK_STORE_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        let base_url = env::var("KIOSK_STORE_URL").unwrap_or_else(|_| match environment {
            Environment::Development => "http://localhost:8090/store/v1".to_string(),
            Environment::Production => DEFAULT_STORE_URL.to_string(),
        });

        let api_key = env::var("KIOSK_STORE_API_KEY").ok();

        let timeout_secs = env::var("KIOSK_STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
            environment,
        })
    }

    /// Create development configuration (local emulator)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:8090/store/v1".to_string(),
            api_key: env::var("KIOSK_STORE_API_KEY").ok(),
            timeout_secs: 10,
            environment: Environment::Development,
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout_secs == 0 {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_development_config() {
        let config = StoreConfig::development();
        assert!(config.base_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoreConfig::default()
            .with_base_url("https://staging.kiosk-apps.dev/store/v1")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "https://staging.kiosk-apps.dev/store/v1");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_validation() {
        assert!(StoreConfig::default().validate().is_ok());
        assert!(StoreConfig::default().with_base_url("").validate().is_err());
        assert!(
            StoreConfig::default()
                .with_base_url("ftp://example.com")
                .validate()
                .is_err()
        );
    }
}
