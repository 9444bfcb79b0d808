//! Authentication endpoints
//!
//! Account registration and login. A successful login returns a [`Session`]
//! that the caller installs on the client with
//! [`crate::StoreClient::set_session`]; it lives for the process lifetime.

use crate::client::StoreClient;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    client: StoreClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Create a credential account
    ///
    /// POST `auth/register`
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<Session> {
        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.client
            .post("auth/register", &request)
            .await
            .map_err(friendly_auth_error)
    }

    /// Exchange credentials for a session token
    ///
    /// POST `auth/login`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.client
            .post("auth/login", &request)
            .await
            .map_err(friendly_auth_error)
    }
}

/// Credentials payload for register/login
#[derive(Debug, Clone, Serialize)]
struct CredentialsRequest {
    email: String,
    password: String,
}

/// An authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on subsequent requests
    pub token: String,
    /// Token lifetime in seconds
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
    /// Email of the authenticated account
    pub email: String,
}

/// Map the backend's auth error codes to messages fit for the terminal.
///
/// The backend reports credential problems as machine codes inside a 400
/// response body; anything unrecognized passes through unchanged.
fn friendly_auth_error(err: ApiError) -> ApiError {
    let ApiError::ApiResponse { status, message } = &err else {
        return err;
    };

    if !(400..500).contains(status) {
        return err;
    }

    let friendly = [
        ("EMAIL_EXISTS", "An account with this email already exists"),
        ("EMAIL_NOT_FOUND", "No account exists for this email"),
        ("INVALID_PASSWORD", "The password is incorrect"),
        ("INVALID_EMAIL", "The email address is badly formatted"),
        ("WEAK_PASSWORD", "The password must be at least 6 characters"),
    ]
    .iter()
    .find(|(code, _)| message.contains(code))
    .map(|(_, text)| (*text).to_string());

    match friendly {
        Some(text) => ApiError::LoginFailed(text),
        None => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserialize() {
        let json = r#"{
            "token": "eyJhbGciOi...",
            "expiresIn": 3600,
            "email": "ana@example.com"
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.email, "ana@example.com");
    }

    #[test]
    fn test_friendly_auth_error_known_code() {
        let err = ApiError::api_response(400, r#"{"error": "INVALID_PASSWORD"}"#);
        match friendly_auth_error(err) {
            ApiError::LoginFailed(msg) => assert_eq!(msg, "The password is incorrect"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_friendly_auth_error_passthrough() {
        let err = ApiError::api_response(500, "internal");
        assert!(matches!(
            friendly_auth_error(err),
            ApiError::ApiResponse { status: 500, .. }
        ));
    }
}
