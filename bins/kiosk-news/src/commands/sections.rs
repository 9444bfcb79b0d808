//! List the known section slugs

use anyhow::Result;
use kiosk_cli::output::Status;
use kiosk_news_client::prelude::SECTIONS;

pub fn run(format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&SECTIONS)?);
        return Ok(());
    }

    Status::header("Sections");
    for section in SECTIONS {
        println!("  {section}");
    }
    Ok(())
}
