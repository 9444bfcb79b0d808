//! Favorites endpoints
//!
//! Favorite marks live in the `favorites` collection as
//! (account, article id) pairs. Listing resolves the marked ids back to
//! full catalog articles.

use crate::client::{push_query, StoreClient};
use crate::endpoints::products::Product;
use crate::endpoints::{Doc, ListResponse, MutationResponse};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Favorites API interface
#[derive(Clone)]
pub struct FavoritesApi {
    client: StoreClient,
}

impl FavoritesApi {
    /// Create a new favorites API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Whether an article is marked as favorite
    ///
    /// GET `documents/favorites?userEmail=<email>&productId=<id>`
    pub async fn is_favorite(&self, email: &str, product_id: i64) -> ApiResult<bool> {
        Ok(!self.marks(email, Some(product_id)).await?.is_empty())
    }

    /// Mark an article as favorite
    ///
    /// POST `documents/favorites`
    pub async fn add(&self, email: &str, product_id: i64) -> ApiResult<()> {
        let mark = FavoriteMark {
            user_email: email.to_string(),
            product_id,
        };
        let _: MutationResponse = self.client.post("documents/favorites", &mark).await?;
        Ok(())
    }

    /// Remove the favorite mark from an article
    pub async fn remove(&self, email: &str, product_id: i64) -> ApiResult<()> {
        for doc in self.marks(email, Some(product_id)).await? {
            let _: MutationResponse = self
                .client
                .delete(&format!("documents/favorites/{}", doc.id))
                .await?;
        }
        Ok(())
    }

    /// Flip the favorite mark; returns the new state
    pub async fn toggle(&self, email: &str, product_id: i64) -> ApiResult<bool> {
        if self.is_favorite(email, product_id).await? {
            self.remove(email, product_id).await?;
            Ok(false)
        } else {
            self.add(email, product_id).await?;
            Ok(true)
        }
    }

    /// List the favorite articles for an account
    ///
    /// Resolves marked ids to full articles; an empty favorites set yields
    /// an empty list without touching the catalog.
    pub async fn list(&self, email: &str) -> ApiResult<Vec<Product>> {
        let ids: Vec<i64> = self
            .marks(email, None)
            .await?
            .into_iter()
            .map(|doc| doc.fields.product_id)
            .collect();

        self.client.products().get_many(&ids).await
    }

    async fn marks(&self, email: &str, product_id: Option<i64>) -> ApiResult<Vec<Doc<FavoriteMark>>> {
        let mut query = Vec::new();
        push_query(&mut query, "userEmail", email);
        if let Some(id) = product_id {
            push_query(&mut query, "productId", id);
        }

        let response: ListResponse<FavoriteMark> = self
            .client
            .get(&format!("documents/favorites?{}", query.join("&")))
            .await?;
        Ok(response.documents())
    }
}

/// One favorite mark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteMark {
    /// Owning account email
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// Catalog id of the marked article
    #[serde(rename = "productId")]
    pub product_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_wire_names() {
        let mark = FavoriteMark {
            user_email: "ana@example.com".to_string(),
            product_id: 7,
        };
        let json = serde_json::to_string(&mark).unwrap();
        assert!(json.contains("\"userEmail\":\"ana@example.com\""));
        assert!(json.contains("\"productId\":7"));
    }
}
