//! Main storefront client implementation

use crate::config::StoreConfig;
use crate::endpoints::auth::Session;
use crate::endpoints::{AuthApi, CartApi, FavoritesApi, HealthApi, ProductsApi, PurchasesApi, UsersApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Public API key header
const APIKEY_HEADER: &str = "apikey";

/// Storefront API client
///
/// Wraps `reqwest` and adds:
/// - Public API key and JSON headers on every request
/// - Bearer session token once [`StoreClient::set_session`] has run
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct StoreClient {
    inner: Client,
    config: Arc<StoreConfig>,
    session: Arc<RwLock<Option<Session>>>,
}

impl StoreClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = StoreConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: StoreConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("kiosk-store-client/1.0"));

        if let Some(ref key) = config.api_key {
            if let Ok(value) = HeaderValue::from_str(key) {
                default_headers.insert(APIKEY_HEADER, value);
            }
        }

        let inner = Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Store the session returned by a successful login
    pub fn set_session(&self, session: Session) {
        *self.session.write().expect("session lock poisoned") = Some(session);
    }

    /// The email of the logged-in account, if any
    pub fn session_email(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.email.clone())
    }

    /// Whether a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.session.read().expect("session lock poisoned").is_some()
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access user profile endpoints
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access product catalog endpoints
    #[must_use]
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Access cart endpoints
    #[must_use]
    pub fn cart(&self) -> CartApi {
        CartApi::new(self.clone())
    }

    /// Access favorites endpoints
    #[must_use]
    pub fn favorites(&self) -> FavoritesApi {
        FavoritesApi::new(self.clone())
    }

    /// Access purchase endpoints
    #[must_use]
    pub fn purchases(&self) -> PurchasesApi {
        PurchasesApi::new(self.clone())
    }

    /// Access the health probe
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request
    #[instrument(skip(self), fields(request_id))]
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::GET, path, Option::<&()>::None).await
    }

    /// Perform a POST request
    #[instrument(skip(self, body), fields(request_id))]
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Perform a PATCH request
    #[instrument(skip(self, body), fields(request_id))]
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Perform a DELETE request
    #[instrument(skip(self), fields(request_id))]
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, Option::<&()>::None).await
    }

    /// GET with timing information
    pub(crate) async fn timed_get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApiResult<(T, Duration)> {
        let start = Instant::now();
        let result = self.get(path).await?;
        Ok((result, start.elapsed()))
    }

    /// Execute a request
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();

        let mut request = self.inner.request(method, &url).header(X_REQUEST_ID, &request_id);

        if let Some(token) = self.bearer_token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let start = Instant::now();
        let response = request.send().await?;
        debug!(
            request_id = %request_id,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        self.handle_response(response).await
    }

    fn bearer_token(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

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
}

/// Append a `key=value` pair to a query string under construction
pub(crate) fn push_query(query: &mut Vec<String>, key: &str, value: impl std::fmt::Display) {
    query.push(format!("{key}={value}"));
}
