//! Show the purchase history

use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::{format_count, format_price, Status};

pub async fn run(context: &AppContext) -> Result<()> {
    let email = context.ensure_session().await?.to_string();
    let purchases = context.client.purchases().history(&email).await?;

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&purchases)?);
        return Ok(());
    }

    if purchases.is_empty() {
        Status::info("No purchases yet");
        return Ok(());
    }

    Status::header(&format_count(purchases.len(), "purchase", "purchases"));
    for purchase in &purchases {
        println!(
            "  {}  {}  {}",
            purchase.purchase_date.format("%Y-%m-%d %H:%M"),
            purchase.payment_method,
            format_price(purchase.total())
        );
        for item in &purchase.cart_items {
            println!(
                "      {:<24} {:<8} x{:<3} {:>10}",
                item.name,
                item.size,
                item.quantity,
                format_price(item.price * f64::from(item.quantity))
            );
        }
    }
    println!();
    Ok(())
}
