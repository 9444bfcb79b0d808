//! Configuration schema for `kiosk.toml`

use serde::{Deserialize, Serialize};

/// Top-level configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSchema {
    /// Storefront settings
    pub store: StoreSection,
    /// News reader settings
    pub news: NewsSection,
    /// Forms exercise settings
    pub forms: FormsSection,
}

/// Storefront settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Base URL of the storefront document API
    pub base_url: Option<String>,
    /// Account email used for login
    pub email: Option<String>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            base_url: None,
            email: None,
        }
    }
}

/// News reader settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSection {
    /// Base URL of the news API
    pub base_url: Option<String>,
    /// API key for the news API
    pub api_key: Option<String>,
    /// Section shown when none is given on the command line
    pub default_section: String,
}

impl Default for NewsSection {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            default_section: "home".to_string(),
        }
    }
}

/// Forms exercise settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsSection {
    /// Path to the default form definition
    pub definition: Option<String>,
}

impl Default for FormsSection {
    fn default() -> Self {
        Self { definition: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_defaults() {
        let schema = ConfigSchema::default();
        assert!(schema.store.base_url.is_none());
        assert_eq!(schema.news.default_section, "home");
    }

    #[test]
    fn test_partial_toml() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [news]
            api_key = "test-key"
            "#,
        )
        .unwrap();
        assert_eq!(schema.news.api_key.as_deref(), Some("test-key"));
        assert_eq!(schema.news.default_section, "home");
        assert!(schema.store.email.is_none());
    }
}
