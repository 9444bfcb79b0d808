//! Checkout and purchase-history endpoints
//!
//! A checkout writes one purchase document carrying the contact block, the
//! validated payment data, and a snapshot of the cart line items, then
//! clears the cart. History reads the purchases back, newest first.

use crate::client::{push_query, StoreClient};
use crate::endpoints::cart::CartItem;
use crate::endpoints::{ListResponse, MutationResponse};
use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Purchases API interface
#[derive(Clone)]
pub struct PurchasesApi {
    client: StoreClient,
}

impl PurchasesApi {
    /// Create a new purchases API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Write a purchase document and clear the account's cart
    ///
    /// POST `documents/purchases`, then DELETE on each cart row. Returns
    /// the new purchase's document id.
    ///
    /// Payment fields are expected to be validated by the caller before
    /// this call; the backend stores them as given.
    pub async fn checkout(&self, purchase: &Purchase) -> ApiResult<String> {
        let response: MutationResponse = self.client.post("documents/purchases", purchase).await?;

        let id = response
            .id
            .ok_or_else(|| ApiError::api_response(500, "checkout returned no document id"))?;

        let cleared = self.client.cart().clear(&purchase.user_email).await?;
        info!(purchase_id = %id, cleared, "Checkout completed");

        Ok(id)
    }

    /// Purchase history for an account, newest first
    ///
    /// GET `documents/purchases?userEmail=<email>`
    pub async fn history(&self, email: &str) -> ApiResult<Vec<Purchase>> {
        let mut query = Vec::new();
        push_query(&mut query, "userEmail", email);

        let response: ListResponse<Purchase> = self
            .client
            .get(&format!("documents/purchases?{}", query.join("&")))
            .await?;

        let mut purchases: Vec<Purchase> = response
            .documents()
            .into_iter()
            .map(|doc| doc.fields)
            .collect();
        purchases.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        Ok(purchases)
    }
}

/// Payment methods accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Credit card: 16-digit number and 3-digit CVV
    CreditCard,
    /// MB Way: 9-digit phone number
    MbWay,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => f.write_str("credit card"),
            Self::MbWay => f.write_str("MB Way"),
        }
    }
}

/// A purchase document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Buying account email
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// Contact name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Delivery address
    pub address: String,
    /// Delivery postal code
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    /// Chosen payment method
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    /// Card number, present only for credit-card payments
    #[serde(rename = "cardNumber", skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// CVV, present only for credit-card payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// MB Way phone, present only for MB Way payments
    #[serde(rename = "mbwayPhone", skip_serializing_if = "Option::is_none")]
    pub mbway_phone: Option<String>,
    /// When the purchase was placed
    #[serde(rename = "purchaseDate")]
    pub purchase_date: DateTime<Utc>,
    /// Snapshot of the cart at checkout time
    #[serde(rename = "cartItems")]
    pub cart_items: Vec<CartItem>,
}

impl Purchase {
    /// Total of the purchased line items
    pub fn total(&self) -> f64 {
        crate::endpoints::cart::total(&self.cart_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_purchase(method: PaymentMethod) -> Purchase {
        Purchase {
            user_email: "ana@example.com".to_string(),
            name: "Ana Martins".to_string(),
            phone: "912345678".to_string(),
            address: "Rua das Flores 10".to_string(),
            postal_code: "4470-296".to_string(),
            payment_method: method,
            card_number: match method {
                PaymentMethod::CreditCard => Some("1234567890123456".to_string()),
                PaymentMethod::MbWay => None,
            },
            cvv: match method {
                PaymentMethod::CreditCard => Some("123".to_string()),
                PaymentMethod::MbWay => None,
            },
            mbway_phone: match method {
                PaymentMethod::CreditCard => None,
                PaymentMethod::MbWay => Some("912345678".to_string()),
            },
            purchase_date: "2025-03-01T12:00:00Z".parse().unwrap(),
            cart_items: Vec::new(),
        }
    }

    #[test]
    fn test_payment_method_wire_form() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit-card\"");
        let json = serde_json::to_string(&PaymentMethod::MbWay).unwrap();
        assert_eq!(json, "\"mb-way\"");
    }

    #[test]
    fn test_method_specific_fields_are_omitted() {
        let card = serde_json::to_string(&sample_purchase(PaymentMethod::CreditCard)).unwrap();
        assert!(card.contains("cardNumber"));
        assert!(!card.contains("mbwayPhone"));

        let mbway = serde_json::to_string(&sample_purchase(PaymentMethod::MbWay)).unwrap();
        assert!(mbway.contains("mbwayPhone"));
        assert!(!mbway.contains("cardNumber"));
    }

    #[test]
    fn test_purchase_roundtrip() {
        let purchase = sample_purchase(PaymentMethod::MbWay);
        let json = serde_json::to_string(&purchase).unwrap();
        let back: Purchase = serde_json::from_str(&json).unwrap();
        assert_eq!(back.payment_method, PaymentMethod::MbWay);
        assert_eq!(back.postal_code, "4470-296");
    }
}
