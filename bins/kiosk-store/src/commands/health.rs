//! Check that the storefront API is reachable

use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::format_duration;
use owo_colors::OwoColorize;

pub async fn run(context: &AppContext) -> Result<()> {
    let result = context.client.health().check_timed().await;

    if context.format == "json" {
        let output = match &result {
            Ok((health, elapsed)) => serde_json::json!({
                "status": health.status,
                "version": health.version,
                "response_time_ms": elapsed.as_millis() as u64,
            }),
            Err(e) => serde_json::json!({
                "status": "error",
                "error": e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return result.map(|_| ()).map_err(Into::into);
    }

    print!("  store api:  ");
    match result {
        Ok((health, elapsed)) => {
            println!(
                "{} (v{}, {})",
                "✓ OK".green(),
                health.version,
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
