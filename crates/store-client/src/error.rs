//! Error types for the storefront client

use thiserror::Error;

/// Result type alias for storefront operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Storefront client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// No session token; the operation requires login
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// Credentials rejected by the auth endpoint
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// Requested document does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Check if this error means the session is missing or rejected
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired(_)
                | Self::LoginFailed(_)
                | Self::ApiResponse { status: 401 | 403, .. }
        )
    }
}
