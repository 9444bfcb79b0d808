//! Read one story in full

use anyhow::{bail, Result};
use kiosk_cli::output::Status;
use kiosk_cli::progress::{finish_error, finish_success, spinner};
use kiosk_news_client::prelude::Story;
use kiosk_news_client::NewsClient;
use owo_colors::OwoColorize;

/// Read the nth top story of a section
pub async fn run_index(
    client: &NewsClient,
    section: &str,
    index: usize,
    format: &str,
) -> Result<()> {
    if index == 0 {
        bail!("story index is 1-based");
    }

    let response = client.stories().top(section).await?;
    let Some(story) = response.results.get(index - 1) else {
        bail!(
            "section '{section}' has {} top stories, asked for #{index}",
            response.results.len()
        );
    };

    render_story(client, story, format).await
}

/// Read a story directly from its URL
pub async fn run_url(client: &NewsClient, url: &str, format: &str) -> Result<()> {
    let story = Story {
        title: url.to_string(),
        summary: String::new(),
        url: url.to_string(),
        published_date: None,
        multimedia: None,
    };
    render_story(client, &story, format).await
}

async fn render_story(client: &NewsClient, story: &Story, format: &str) -> Result<()> {
    let pb = spinner("Fetching article...");
    let body = match client.article_body(&story.url).await {
        Ok(body) => {
            finish_success(&pb, "Article fetched");
            body
        }
        Err(e) => {
            finish_error(&pb, "Fetch failed");
            return Err(e.into());
        }
    };

    if format == "json" {
        let output = serde_json::json!({
            "title": story.title,
            "abstract": story.summary,
            "url": story.url,
            "image": story.image_url(),
            "body": body,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header(&story.title);
    if !story.summary.is_empty() {
        println!("{}", story.summary.bold());
        println!();
    }
    if let Some(image) = story.image_url() {
        Status::detail("image", image);
        println!();
    }

    match body {
        Some(text) => println!("{text}"),
        None => println!("{}", "Content not available.".dimmed()),
    }

    Ok(())
}
