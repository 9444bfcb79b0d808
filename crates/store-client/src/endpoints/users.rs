//! User profile endpoints
//!
//! Profile documents live in the `users` collection, keyed by the account
//! email. Registration writes the profile right after the credential
//! account is created; checkout reads it back to prefill the contact block.

use crate::client::{push_query, StoreClient};
use crate::endpoints::{ListResponse, MutationResponse};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// User profile API interface
#[derive(Clone)]
pub struct UsersApi {
    client: StoreClient,
}

impl UsersApi {
    /// Create a new users API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Store a profile document
    ///
    /// POST `documents/users`
    pub async fn create(&self, profile: &UserProfile) -> ApiResult<String> {
        let response: MutationResponse = self.client.post("documents/users", profile).await?;

        response
            .id
            .ok_or_else(|| ApiError::api_response(500, "create returned no document id"))
    }

    /// Fetch the profile for an account email
    ///
    /// GET `documents/users?email=<email>`
    pub async fn get_by_email(&self, email: &str) -> ApiResult<Option<UserProfile>> {
        let mut query = Vec::new();
        push_query(&mut query, "email", email);

        let response: ListResponse<UserProfile> = self
            .client
            .get(&format!("documents/users?{}", query.join("&")))
            .await?;

        Ok(response.documents().into_iter().next().map(|doc| doc.fields))
    }
}

/// A user profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile photo URL, if one was uploaded
    #[serde(rename = "photoUrl", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Full name
    pub name: String,
    /// Birth date, `DD/MM/YYYY`
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    /// Phone number
    pub phone: String,
    /// Account email
    pub email: String,
    /// Street address
    pub address: String,
    /// Postal code, `0000-000`
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    /// Self-reported gender
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_roundtrip() {
        let profile = UserProfile {
            photo_url: None,
            name: "Ana Martins".to_string(),
            birth_date: "01/02/1999".to_string(),
            phone: "912345678".to_string(),
            email: "ana@example.com".to_string(),
            address: "Rua das Flores 10".to_string(),
            postal_code: "4470-296".to_string(),
            gender: "Feminino".to_string(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"postalCode\":\"4470-296\""));
        assert!(!json.contains("photoUrl"));

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Ana Martins");
    }
}
