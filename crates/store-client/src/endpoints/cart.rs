//! Cart endpoints
//!
//! Cart rows live in the `carts` collection, one row per
//! (account, article, size). Adding an article that already has a row for
//! the chosen size increments that row instead of duplicating it.

use crate::client::{push_query, StoreClient};
use crate::endpoints::products::Product;
use crate::endpoints::{Doc, ListResponse, MutationResponse};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cart API interface
#[derive(Clone)]
pub struct CartApi {
    client: StoreClient,
}

impl CartApi {
    /// Create a new cart API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// List the cart rows for an account
    ///
    /// GET `documents/carts?userEmail=<email>`
    pub async fn items(&self, email: &str) -> ApiResult<Vec<CartItem>> {
        let rows = self.rows(email, None, None).await?;
        Ok(rows.into_iter().map(|doc| doc.fields).collect())
    }

    /// Add an article to the cart in the chosen size
    ///
    /// If a row for (email, article, size) already exists, its quantity is
    /// incremented; otherwise a new row with quantity 1 is created.
    pub async fn add(&self, email: &str, product: &Product, size: &str) -> ApiResult<CartAddOutcome> {
        let existing = self.rows(email, Some(product.id), Some(size)).await?;

        match existing.into_iter().next() {
            Some(doc) => {
                let new_quantity = doc.fields.quantity + 1;
                self.set_quantity(&doc.id, new_quantity).await?;
                debug!(product_id = product.id, size, new_quantity, "Cart row incremented");
                Ok(CartAddOutcome::QuantityUpdated(new_quantity))
            }
            None => {
                let row = CartItem {
                    user_email: email.to_string(),
                    product_id: product.id,
                    name: product.name.clone(),
                    img_url: product.img_url.clone(),
                    price: product.price,
                    quantity: 1,
                    size: size.to_string(),
                };
                let _: MutationResponse = self.client.post("documents/carts", &row).await?;
                debug!(product_id = product.id, size, "Cart row created");
                Ok(CartAddOutcome::Added)
            }
        }
    }

    /// Remove the row for (email, article, size)
    ///
    /// DELETE on every matching document.
    pub async fn remove(&self, email: &str, product_id: i64, size: &str) -> ApiResult<()> {
        let rows = self.rows(email, Some(product_id), Some(size)).await?;
        for doc in rows {
            let _: MutationResponse = self
                .client
                .delete(&format!("documents/carts/{}", doc.id))
                .await?;
        }
        Ok(())
    }

    /// Adjust a row's quantity by one
    ///
    /// Returns the new quantity; a decrement reaching zero deletes the row
    /// and returns 0.
    pub async fn adjust(
        &self,
        email: &str,
        product_id: i64,
        size: &str,
        increment: bool,
    ) -> ApiResult<u32> {
        let rows = self.rows(email, Some(product_id), Some(size)).await?;
        let doc = rows
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("no cart row for article {product_id} in {size}")))?;

        let current = doc.fields.quantity;
        let new_quantity = if increment { current + 1 } else { current.saturating_sub(1) };

        if new_quantity > 0 {
            self.set_quantity(&doc.id, new_quantity).await?;
        } else {
            let _: MutationResponse = self
                .client
                .delete(&format!("documents/carts/{}", doc.id))
                .await?;
        }

        Ok(new_quantity)
    }

    /// Delete every cart row for an account (used after checkout)
    pub async fn clear(&self, email: &str) -> ApiResult<usize> {
        let rows = self.rows(email, None, None).await?;
        let count = rows.len();
        for doc in rows {
            let _: MutationResponse = self
                .client
                .delete(&format!("documents/carts/{}", doc.id))
                .await?;
        }
        Ok(count)
    }

    async fn rows(
        &self,
        email: &str,
        product_id: Option<i64>,
        size: Option<&str>,
    ) -> ApiResult<Vec<Doc<CartItem>>> {
        let mut query = Vec::new();
        push_query(&mut query, "userEmail", email);
        if let Some(id) = product_id {
            push_query(&mut query, "productId", id);
        }
        if let Some(s) = size {
            push_query(&mut query, "size", s.replace(' ', "%20"));
        }

        let response: ListResponse<CartItem> = self
            .client
            .get(&format!("documents/carts?{}", query.join("&")))
            .await?;
        Ok(response.documents())
    }

    async fn set_quantity(&self, doc_id: &str, quantity: u32) -> ApiResult<()> {
        let _: MutationResponse = self
            .client
            .patch(
                &format!("documents/carts/{doc_id}"),
                &serde_json::json!({ "quantity": quantity }),
            )
            .await?;
        Ok(())
    }
}

/// Outcome of a cart add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddOutcome {
    /// A new row was created with quantity 1
    Added,
    /// An existing row was incremented to the contained quantity
    QuantityUpdated(u32),
}

/// One cart row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Owning account email
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// Catalog id of the article
    #[serde(rename = "productId")]
    pub product_id: i64,
    /// Article name, denormalized for display
    pub name: String,
    /// Article image URL, denormalized for display
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    /// Unit price in euros
    pub price: f64,
    /// Quantity in the cart
    pub quantity: u32,
    /// Chosen size
    pub size: String,
}

/// Cart total: Σ price × quantity
pub fn total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}
