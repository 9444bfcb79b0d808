//! Article-body extraction from story pages
//!
//! Story pages embed their structured data as a
//! `<script type="application/ld+json">` block. The article text, when
//! published there, sits in the `articleBody` field.

use once_cell::sync::Lazy;
use regex::Regex;

static LD_JSON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid ld+json pattern")
});

/// Extract the article body from a story page's HTML
///
/// Returns `None` when the page has no ld+json block, the block is not
/// valid JSON, or the JSON carries no `articleBody` string.
pub fn extract_article_body(html: &str) -> Option<String> {
    let captures = LD_JSON_RE.captures(html)?;
    let payload = captures.get(1)?.as_str();

    let value: serde_json::Value = serde_json::from_str(payload.trim()).ok()?;
    value
        .get("articleBody")
        .and_then(|body| body.as_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_article_body() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">
            {"@type": "NewsArticle", "headline": "Example", "articleBody": "Full text here."}
            </script>
            </head><body></body></html>
        "#;

        assert_eq!(extract_article_body(html).as_deref(), Some("Full text here."));
    }

    #[test]
    fn test_uses_first_ld_json_block() {
        let html = r#"
            <script type="application/ld+json">{"articleBody": "first"}</script>
            <script type="application/ld+json">{"articleBody": "second"}</script>
        "#;

        assert_eq!(extract_article_body(html).as_deref(), Some("first"));
    }

    #[test]
    fn test_missing_script_yields_none() {
        assert_eq!(extract_article_body("<html><body>plain page</body></html>"), None);
    }

    #[test]
    fn test_missing_article_body_field_yields_none() {
        let html = r#"<script type="application/ld+json">{"@type": "WebPage"}</script>"#;
        assert_eq!(extract_article_body(html), None);
    }

    #[test]
    fn test_invalid_json_yields_none() {
        let html = r#"<script type="application/ld+json">{not json</script>"#;
        assert_eq!(extract_article_body(html), None);
    }

    #[test]
    fn test_attributes_around_type_are_tolerated() {
        let html = r#"<script data-rh="true" type='application/ld+json' id="meta">
            {"articleBody": "tolerant"}
        </script>"#;
        assert_eq!(extract_article_body(html).as_deref(), Some("tolerant"));
    }
}
