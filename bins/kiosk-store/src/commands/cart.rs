//! Manage the cart

use crate::AppContext;
use anyhow::Result;
use clap::Subcommand;
use kiosk_cli::output::{format_price, Status};
use kiosk_core::validation::Validator;
use kiosk_store_client::endpoints::cart::{self, CartAddOutcome, CartItem};
use kiosk_store_client::endpoints::products::SHOE_SIZES;
use owo_colors::OwoColorize;

#[derive(Subcommand, Debug)]
pub enum CartAction {
    /// Add an article in the chosen size
    Add {
        /// Catalog id of the article
        id: i64,
        /// Size, e.g. `EU 38` (or just `38`)
        size: String,
    },

    /// List the cart
    List,

    /// Increase a row's quantity by one
    Inc {
        /// Catalog id of the article
        id: i64,
        /// Size of the row
        size: String,
    },

    /// Decrease a row's quantity by one (removes the row at zero)
    Dec {
        /// Catalog id of the article
        id: i64,
        /// Size of the row
        size: String,
    },

    /// Remove a row
    Remove {
        /// Catalog id of the article
        id: i64,
        /// Size of the row
        size: String,
    },
}

pub async fn run(context: &AppContext, action: &CartAction) -> Result<()> {
    let email = context.ensure_session().await?.to_string();

    match action {
        CartAction::Add { id, size } => add(context, &email, *id, size).await,
        CartAction::List => list(context, &email).await,
        CartAction::Inc { id, size } => adjust(context, &email, *id, size, true).await,
        CartAction::Dec { id, size } => adjust(context, &email, *id, size, false).await,
        CartAction::Remove { id, size } => remove(context, &email, *id, size).await,
    }
}

async fn add(context: &AppContext, email: &str, id: i64, size: &str) -> Result<()> {
    let size = normalize_size(size)?;

    let product = context
        .client
        .products()
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no article with id {id}"))?;

    match context.client.cart().add(email, &product, &size).await? {
        CartAddOutcome::Added => {
            Status::success(&format!("{} ({size}) added to the cart", product.name));
        }
        CartAddOutcome::QuantityUpdated(quantity) => {
            Status::success(&format!(
                "{} ({size}) already in the cart, quantity is now {quantity}",
                product.name
            ));
        }
    }
    Ok(())
}

async fn list(context: &AppContext, email: &str) -> Result<()> {
    let items = context.client.cart().items(email).await?;

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        Status::info("The cart is empty");
        return Ok(());
    }

    print_rows(&items);
    println!(
        "  {} {}",
        "total:".bold(),
        format_price(cart::total(&items)).bold()
    );
    println!();
    Ok(())
}

async fn adjust(
    context: &AppContext,
    email: &str,
    id: i64,
    size: &str,
    increment: bool,
) -> Result<()> {
    let size = normalize_size(size)?;
    let quantity = context
        .client
        .cart()
        .adjust(email, id, &size, increment)
        .await?;

    if quantity == 0 {
        Status::success(&format!("Article {id} ({size}) removed from the cart"));
    } else {
        Status::success(&format!("Article {id} ({size}) quantity is now {quantity}"));
    }
    Ok(())
}

async fn remove(context: &AppContext, email: &str, id: i64, size: &str) -> Result<()> {
    let size = normalize_size(size)?;
    context.client.cart().remove(email, id, &size).await?;
    Status::success(&format!("Article {id} ({size}) removed from the cart"));
    Ok(())
}

fn print_rows(items: &[CartItem]) {
    println!();
    for item in items {
        println!(
            "  {:<24} {:<8} x{:<3} {:>10}",
            item.name,
            item.size,
            item.quantity,
            format_price(item.price * f64::from(item.quantity))
        );
    }
    println!();
}

/// Normalize a size argument to the catalog form and check it is offered
///
/// Accepts `EU 38`, `eu 38`, or a bare `38`.
fn normalize_size(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let normalized = if trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("EU {trimmed}")
    } else {
        let mut s = trimmed.to_uppercase();
        if !s.starts_with("EU ") && s.starts_with("EU") {
            s = format!("EU {}", &s[2..]);
        }
        s
    };

    Validator::new()
        .one_of("size", &normalized, &SHOE_SIZES)
        .validate()
        .to_result()
        .map_err(|_| {
            anyhow::anyhow!(
                "size '{input}' is not offered (sizes: {})",
                SHOE_SIZES.join(", ")
            )
        })?;

    Ok(normalized)
}
