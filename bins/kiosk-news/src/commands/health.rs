//! Check that the news API is reachable

use anyhow::Result;
use kiosk_cli::output::format_duration;
use kiosk_news_client::NewsClient;
use owo_colors::OwoColorize;
use std::time::Instant;

pub async fn run(client: &NewsClient, format: &str) -> Result<()> {
    let start = Instant::now();
    let result = client.stories().top("home").await;
    let elapsed = start.elapsed();

    if format == "json" {
        let output = serde_json::json!({
            "status": if result.is_ok() { "ok" } else { "error" },
            "response_time_ms": elapsed.as_millis() as u64,
            "error": result.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return result.map(|_| ()).map_err(Into::into);
    }

    print!("  news api:  ");
    match result {
        Ok(response) => {
            println!(
                "{} ({} stories, {})",
                "✓ OK".green(),
                response.results.len(),
                format_duration(elapsed).dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗ Error".red(), e);
            Err(e.into())
        }
    }
}
