//! List the catalog

use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::{format_count, format_price, Status};
use kiosk_cli::progress::{finish_error, finish_success, spinner};
use kiosk_store_client::endpoints::products::{Audience, Product};
use owo_colors::OwoColorize;

pub async fn run(context: &AppContext, audience: Option<&str>) -> Result<()> {
    let api = context.client.products();

    let pb = spinner("Fetching catalog...");
    let result = match audience {
        Some(raw) => {
            let audience: Audience = raw.parse().map_err(anyhow::Error::msg)?;
            api.list_by_audience(audience).await
        }
        None => api.list().await,
    };

    let products = match result {
        Ok(products) => {
            finish_success(&pb, &format_count(products.len(), "article", "articles"));
            products
        }
        Err(e) => {
            finish_error(&pb, "Fetch failed");
            return Err(e.into());
        }
    };

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    print_table(&products);
    Ok(())
}

fn print_table(products: &[Product]) {
    if products.is_empty() {
        Status::info("The catalog is empty");
        return;
    }

    println!();
    println!(
        "{:>5}  {:<12} {:<24} {:<10} {:>10}",
        "id".dimmed(),
        "brand".dimmed(),
        "name".dimmed(),
        "color".dimmed(),
        "price".dimmed()
    );
    for product in products {
        println!(
            "{:>5}  {:<12} {:<24} {:<10} {:>10}",
            product.id,
            product.brand,
            product.name,
            product.color,
            format_price(product.price)
        );
    }
    println!();
}
