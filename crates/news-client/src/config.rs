//! Configuration for the news client

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default news API base URL
const DEFAULT_NEWS_URL: &str = "https://api.nytimes.com/svc";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "KIOSK_NEWS_API_KEY";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Base URL of the news API
    pub base_url: String,
    /// API key sent as the `api-key` query parameter
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NEWS_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl NewsConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `KIOSK_NEWS_URL`: Base URL of the news API
    /// - `KIOSK_NEWS_API_KEY`: API key
    /// - `KIOSK_NEWS_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env::var("KIOSK_NEWS_URL").unwrap_or_else(|_| DEFAULT_NEWS_URL.to_string());
        let api_key = env::var(API_KEY_VAR).ok();

        let timeout_secs = env::var("KIOSK_NEWS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
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

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured API key, or the error telling the user how to set one
    pub fn require_api_key(&self) -> ApiResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey(API_KEY_VAR))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NewsConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_require_api_key() {
        let config = NewsConfig::default();
        assert!(config.require_api_key().is_err());

        let config = config.with_api_key("test-key");
        assert_eq!(config.require_api_key().unwrap(), "test-key");
    }

    #[test]
    fn test_validation() {
        assert!(NewsConfig::default().validate().is_ok());
        assert!(NewsConfig::default().with_base_url("").validate().is_err());
    }
}
