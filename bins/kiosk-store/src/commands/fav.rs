//! Manage favorites

use crate::AppContext;
use anyhow::Result;
use clap::Subcommand;
use kiosk_cli::output::{format_count, format_price, Status};

#[derive(Subcommand, Debug)]
pub enum FavAction {
    /// Flip the favorite mark on an article
    Toggle {
        /// Catalog id of the article
        id: i64,
    },

    /// List the favorite articles
    List,
}

pub async fn run(context: &AppContext, action: &FavAction) -> Result<()> {
    let email = context.ensure_session().await?.to_string();

    match action {
        FavAction::Toggle { id } => toggle(context, &email, *id).await,
        FavAction::List => list(context, &email).await,
    }
}

async fn toggle(context: &AppContext, email: &str, id: i64) -> Result<()> {
    // Surface a proper error for unknown articles before writing a mark.
    let product = context
        .client
        .products()
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no article with id {id}"))?;

    if context.client.favorites().toggle(email, id).await? {
        Status::success(&format!("{} marked as favorite", product.name));
    } else {
        Status::success(&format!("{} is no longer a favorite", product.name));
    }
    Ok(())
}

async fn list(context: &AppContext, email: &str) -> Result<()> {
    let products = context.client.favorites().list(email).await?;

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        Status::info("No favorites yet");
        return Ok(());
    }

    Status::header(&format_count(products.len(), "favorite", "favorites"));
    for product in &products {
        println!(
            "  {:>5}  {:<12} {:<24} {:>10}",
            product.id,
            product.brand,
            product.name,
            format_price(product.price)
        );
    }
    println!();
    Ok(())
}
