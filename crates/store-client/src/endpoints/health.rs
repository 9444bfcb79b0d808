//! Health probe

use crate::client::StoreClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health API interface
#[derive(Clone)]
pub struct HealthApi {
    client: StoreClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Probe the storefront API
    ///
    /// GET `health`
    pub async fn check(&self) -> ApiResult<HealthResponse> {
        self.client.get("health").await
    }

    /// Probe with timing information
    pub async fn check_timed(&self) -> ApiResult<(HealthResponse, Duration)> {
        self.client.timed_get("health").await
    }
}

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g. "ok")
    pub status: String,
    /// API version
    pub version: String,
    /// Timestamp of the probe
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{
            "status": "ok",
            "version": "2.1.0",
            "timestamp": "2025-03-01T00:00:00Z"
        }"#;

        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, "2.1.0");
    }
}
