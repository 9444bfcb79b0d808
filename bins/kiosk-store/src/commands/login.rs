//! Check the configured credentials

use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::Status;

pub async fn run(context: &AppContext) -> Result<()> {
    let email = context.ensure_session().await?;

    if context.format == "json" {
        println!(
            "{}",
            serde_json::json!({ "email": email, "authenticated": true })
        );
        return Ok(());
    }

    Status::success(&format!("Logged in as {email}"));
    Ok(())
}
