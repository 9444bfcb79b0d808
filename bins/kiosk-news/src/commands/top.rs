//! Show the top stories of a section

use anyhow::Result;
use kiosk_cli::progress::{finish_error, finish_success, spinner};
use kiosk_news_client::NewsClient;
use owo_colors::OwoColorize;

pub async fn run(client: &NewsClient, section: &str, limit: usize, format: &str) -> Result<()> {
    let pb = spinner(&format!("Fetching top stories for {section}..."));
    let response = match client.stories().top(section).await {
        Ok(response) => {
            finish_success(&pb, &format!("{} stories", response.results.len()));
            response
        }
        Err(e) => {
            finish_error(&pb, "Fetch failed");
            return Err(e.into());
        }
    };

    let stories = &response.results[..response.results.len().min(limit)];

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(stories)?);
        return Ok(());
    }

    println!();
    for (index, story) in stories.iter().enumerate() {
        println!("{:>3}. {}", index + 1, story.title.bold());
        if !story.summary.is_empty() {
            println!("     {}", story.summary.dimmed());
        }
        if let Some(date) = story.published_date {
            println!("     {}", date.format("%Y-%m-%d %H:%M").to_string().dimmed());
        }
    }
    println!();

    Ok(())
}
