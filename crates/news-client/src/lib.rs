//! Typed client for the news API
//!
//! Fetches top stories per section and, for reading, extracts article
//! bodies from the story page's embedded `application/ld+json` structured
//! data.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiosk_news_client::NewsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NewsClient::new()?;
//!
//!     let top = client.stories().top("technology").await?;
//!     for story in &top.results {
//!         println!("{}", story.title);
//!     }
//!
//!     if let Some(story) = top.results.first() {
//!         match client.article_body(&story.url).await? {
//!             Some(body) => println!("{body}"),
//!             None => println!("Content not available."),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod article;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use article::extract_article_body;
pub use client::NewsClient;
pub use config::NewsConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::NewsClient;
    pub use crate::config::NewsConfig;
    pub use crate::endpoints::stories::{Multimedia, Story, TopStoriesResponse, SECTIONS};
    pub use crate::endpoints::StoriesApi;
    pub use crate::error::{ApiError, ApiResult};
}
