//! Main news client implementation

use crate::article::extract_article_body;
use crate::config::NewsConfig;
use crate::endpoints::StoriesApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// News API client
///
/// Wraps `reqwest` and adds the API key query parameter, request
/// correlation IDs, and the article-body extractor for story pages.
#[derive(Clone)]
pub struct NewsClient {
    inner: Client,
    config: Arc<NewsConfig>,
}

impl NewsClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = NewsConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: NewsConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static("kiosk-news-client/1.0"));

        let inner = Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Access the top-stories endpoints
    #[must_use]
    pub fn stories(&self) -> StoriesApi {
        StoriesApi::new(self.clone())
    }

    /// Fetch a story page and extract its article body
    ///
    /// The body is read from the page's embedded `application/ld+json`
    /// structured data. A page without it (or without an `articleBody`
    /// field) yields `Ok(None)`; only transport failures are errors.
    #[instrument(skip(self), fields(request_id))]
    pub async fn article_body(&self, url: &str) -> ApiResult<Option<String>> {
        let html = self.get_text(url).await?;
        Ok(extract_article_body(&html))
    }

    /// Perform a GET request against the news API, appending the API key
    #[instrument(skip(self), fields(request_id))]
    pub(crate) async fn get_api<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let api_key = self.config.require_api_key()?;
        let separator = if path.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}/{}{}api-key={}",
            self.config.base_url.trim_end_matches('/'),
            path,
            separator,
            api_key,
        );

        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        let response = self
            .inner
            .get(&url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;

        let status = response.status();
        debug!(
            request_id = %request_id,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }

    /// Perform a GET request against an absolute URL and return the body text
    pub(crate) async fn get_text(&self, url: &str) -> ApiResult<String> {
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            response.text().await.map_err(ApiError::Request)
        } else {
            Err(ApiError::api_response(
                status.as_u16(),
                format!("fetching {url}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = NewsConfig::default().with_api_key("test-key");
        assert!(NewsClient::with_config(config).is_ok());
    }

    #[test]
    fn test_client_creation_rejects_bad_url() {
        let config = NewsConfig::default().with_base_url("not-a-url");
        assert!(NewsClient::with_config(config).is_err());
    }
}
