//! Top-stories endpoints
//!
//! Maps to `topstories/v2/{section}.json`. Unknown sections surface the
//! API's 404 unchanged.

use crate::client::NewsClient;
use crate::error::ApiResult;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Section slugs the API publishes
pub const SECTIONS: [&str; 15] = [
    "home",
    "arts",
    "books",
    "business",
    "fashion",
    "food",
    "health",
    "movies",
    "opinion",
    "politics",
    "science",
    "sports",
    "technology",
    "travel",
    "world",
];

/// Top-stories API interface
#[derive(Clone)]
pub struct StoriesApi {
    client: NewsClient,
}

impl StoriesApi {
    /// Create a new stories API interface
    pub(crate) fn new(client: NewsClient) -> Self {
        Self { client }
    }

    /// Fetch the top stories of a section
    ///
    /// GET `topstories/v2/{section}.json`
    pub async fn top(&self, section: &str) -> ApiResult<TopStoriesResponse> {
        self.client
            .get_api(&format!("topstories/v2/{section}.json"))
            .await
    }
}

/// Response for a top-stories query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopStoriesResponse {
    /// Section the stories belong to
    pub section: Option<String>,
    /// The stories
    pub results: Vec<Story>,
}

/// One story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Headline
    pub title: String,
    /// Short summary
    #[serde(rename = "abstract")]
    pub summary: String,
    /// URL of the full article page
    pub url: String,
    /// Publication timestamp
    #[serde(default)]
    pub published_date: Option<DateTime<FixedOffset>>,
    /// Associated images
    #[serde(default)]
    pub multimedia: Option<Vec<Multimedia>>,
}

impl Story {
    /// Preferred image for the story: the "Super Jumbo" rendition when
    /// present, otherwise the first one.
    pub fn image_url(&self) -> Option<&str> {
        let images = self.multimedia.as_deref()?;
        images
            .iter()
            .find(|m| m.format == "Super Jumbo")
            .or_else(|| images.first())
            .map(|m| m.url.as_str())
    }
}

/// One image rendition of a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Multimedia {
    /// Image URL
    pub url: String,
    /// Rendition name (e.g. "Super Jumbo", "Large Thumbnail")
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "section": "technology",
            "results": [
                {
                    "title": "Example headline",
                    "abstract": "Short summary.",
                    "url": "https://example.com/story",
                    "published_date": "2025-03-01T09:30:00-05:00",
                    "multimedia": [
                        {"url": "https://example.com/thumb.jpg", "format": "Large Thumbnail"},
                        {"url": "https://example.com/big.jpg", "format": "Super Jumbo"}
                    ]
                }
            ]
        }"#;

        let response: TopStoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);

        let story = &response.results[0];
        assert_eq!(story.title, "Example headline");
        assert_eq!(story.summary, "Short summary.");
        assert_eq!(story.image_url(), Some("https://example.com/big.jpg"));
    }

    #[test]
    fn test_story_without_multimedia() {
        let json = r#"{
            "title": "Bare story",
            "abstract": "No images.",
            "url": "https://example.com/bare",
            "multimedia": null
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.image_url(), None);
        assert!(story.published_date.is_none());
    }

    #[test]
    fn test_image_falls_back_to_first() {
        let json = r#"{
            "title": "Story",
            "abstract": "s",
            "url": "u",
            "multimedia": [
                {"url": "https://example.com/a.jpg", "format": "Large Thumbnail"}
            ]
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.image_url(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_sections_contain_defaults() {
        assert!(SECTIONS.contains(&"home"));
        assert!(SECTIONS.contains(&"technology"));
    }
}
