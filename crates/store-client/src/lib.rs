//! Typed client for the kiosk storefront document API
//!
//! The storefront backend is a managed document store exposed over REST.
//! Documents live in collections (`users`, `articles`, `carts`,
//! `favorites`, `purchases`) and are filtered with query parameters. This
//! crate wraps it in typed endpoint groups:
//!
//! - **auth**: account registration and login
//! - **users**: profile documents
//! - **products**: the article catalog
//! - **cart**: per-account cart rows with add-or-increment semantics
//! - **favorites**: per-account favorite marks
//! - **purchases**: checkout and purchase history
//!
//! # Example
//!
//! ```rust,no_run
//! use kiosk_store_client::StoreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StoreClient::new()?;
//!
//!     let session = client.auth().login("ana@example.com", "secret").await?;
//!     client.set_session(session);
//!
//!     for product in client.products().list().await? {
//!         println!("{} — {:.2}", product.name, product.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::StoreClient;
pub use config::{Environment, StoreConfig};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::StoreClient;
    pub use crate::config::{Environment, StoreConfig};
    pub use crate::endpoints::{
        AuthApi, CartApi, FavoritesApi, HealthApi, ProductsApi, PurchasesApi, UsersApi,
    };
    pub use crate::error::{ApiError, ApiResult};
}
