//! Endpoint groups of the storefront document API

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod health;
pub mod products;
pub mod purchases;
pub mod users;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use favorites::FavoritesApi;
pub use health::HealthApi;
pub use products::ProductsApi;
pub use purchases::PurchasesApi;
pub use users::UsersApi;

use serde::{Deserialize, Serialize};

/// A stored document: server-assigned id plus the document fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doc<T> {
    /// Server-assigned document id
    pub id: String,
    /// Document fields
    #[serde(flatten)]
    pub fields: T,
}

/// Response envelope for document listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Whether the query succeeded
    pub success: bool,
    /// Matching documents
    pub data: Option<Vec<Doc<T>>>,
    /// Error detail when `success` is false
    pub error: Option<ErrorInfo>,
}

impl<T> ListResponse<T> {
    /// The matching documents, empty when none matched
    pub fn documents(self) -> Vec<Doc<T>> {
        self.data.unwrap_or_default()
    }
}

/// Response envelope for single-document mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Whether the mutation succeeded
    pub success: bool,
    /// Id of the created or updated document
    pub id: Option<String>,
    /// Error detail when `success` is false
    pub error: Option<ErrorInfo>,
}

/// Error info returned inside response envelopes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Row {
        quantity: u32,
    }

    #[test]
    fn test_doc_flattening() {
        let json = r#"{"id": "abc123", "quantity": 2}"#;
        let doc: Doc<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "abc123");
        assert_eq!(doc.fields.quantity, 2);
    }

    #[test]
    fn test_list_response_defaults_to_empty() {
        let json = r#"{"success": true, "data": null, "error": null}"#;
        let resp: ListResponse<Row> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert!(resp.documents().is_empty());
    }
}
