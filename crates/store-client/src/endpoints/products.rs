//! Product catalog endpoints
//!
//! Articles live in the `articles` collection. Listings tolerate malformed
//! documents: anything that fails to deserialize is skipped rather than
//! failing the whole query.

use crate::client::{push_query, StoreClient};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Shoe sizes offered by the storefront
pub const SHOE_SIZES: [&str; 7] = [
    "EU 36", "EU 37", "EU 38", "EU 39", "EU 40", "EU 41", "EU 42",
];

/// Product catalog API interface
#[derive(Clone)]
pub struct ProductsApi {
    client: StoreClient,
}

impl ProductsApi {
    /// Create a new products API interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// List the whole catalog
    ///
    /// GET `documents/articles`
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        let response: RawListResponse = self.client.get("documents/articles").await?;
        Ok(parse_products(response))
    }

    /// List articles for one audience
    ///
    /// GET `documents/articles?audience=<audience>`
    pub async fn list_by_audience(&self, audience: Audience) -> ApiResult<Vec<Product>> {
        let mut query = Vec::new();
        push_query(&mut query, "audience", audience.as_str());

        let response: RawListResponse = self
            .client
            .get(&format!("documents/articles?{}", query.join("&")))
            .await?;
        Ok(parse_products(response))
    }

    /// Fetch a single article by its catalog id
    ///
    /// GET `documents/articles?id=<id>`
    pub async fn get(&self, id: i64) -> ApiResult<Option<Product>> {
        let mut query = Vec::new();
        push_query(&mut query, "id", id);

        let response: RawListResponse = self
            .client
            .get(&format!("documents/articles?{}", query.join("&")))
            .await?;
        Ok(parse_products(response).into_iter().next())
    }

    /// Fetch a set of articles by catalog id
    ///
    /// GET `documents/articles?ids=<id,id,...>`
    ///
    /// An empty id set short-circuits to an empty list without a request.
    pub async fn get_many(&self, ids: &[i64]) -> ApiResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response: RawListResponse = self
            .client
            .get(&format!("documents/articles?ids={joined}"))
            .await?;
        Ok(parse_products(response))
    }
}

/// Listing envelope kept as raw JSON so malformed documents can be skipped
#[derive(Debug, Deserialize)]
struct RawListResponse {
    #[allow(dead_code)]
    success: bool,
    data: Option<Vec<serde_json::Value>>,
}

fn parse_products(response: RawListResponse) -> Vec<Product> {
    response
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

/// A catalog article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog id (distinct from the backing document id)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Image URL
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    /// Colorway
    pub color: String,
    /// Brand
    pub brand: String,
    /// Model line
    pub model: String,
    /// Price in euros
    pub price: f64,
    /// Target audience
    pub audience: Audience,
}

/// Catalog audience categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Men's catalog
    Men,
    /// Women's catalog
    Women,
    /// Kids' catalog
    Kids,
}

impl Audience {
    /// The query-parameter form of the audience
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Kids => "kids",
        }
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "kids" => Ok(Self::Kids),
            other => Err(format!("unknown audience '{other}' (expected men, women, or kids)")),
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize() {
        let json = r#"{
            "id": 7,
            "name": "Air Zoom",
            "imgUrl": "https://cdn.example.com/airzoom.jpg",
            "color": "White",
            "brand": "Nike",
            "model": "Zoom",
            "price": 119.99,
            "audience": "men"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.audience, Audience::Men);
    }

    #[test]
    fn test_malformed_documents_are_skipped() {
        let response: RawListResponse = serde_json::from_str(
            r#"{
                "success": true,
                "data": [
                    {"id": 1, "name": "Runner", "imgUrl": "u", "color": "Black",
                     "brand": "Asics", "model": "GT", "price": 89.9, "audience": "women"},
                    {"id": "not-a-number"},
                    {"id": 2, "name": "Court", "imgUrl": "u", "color": "White",
                     "brand": "Puma", "model": "Ace", "price": 59.5, "audience": "kids"}
                ]
            }"#,
        )
        .unwrap();

        let products = parse_products(response);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 2);
    }

    #[test]
    fn test_audience_parse() {
        assert_eq!("women".parse::<Audience>().unwrap(), Audience::Women);
        assert!("pets".parse::<Audience>().is_err());
    }
}
