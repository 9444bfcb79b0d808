//! Show one article in detail

use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::{format_price, Status};
use kiosk_store_client::endpoints::products::SHOE_SIZES;

pub async fn run(context: &AppContext, id: i64) -> Result<()> {
    let product = context
        .client
        .products()
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no article with id {id}"))?;

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    Status::header(&format!("{} {}", product.brand, product.name));
    Status::detail("id", &product.id.to_string());
    Status::detail("model", &product.model);
    Status::detail("color", &product.color);
    Status::detail("audience", product.audience.as_str());
    Status::detail("price", &format_price(product.price));
    Status::detail("image", &product.img_url);
    Status::detail("sizes", &SHOE_SIZES.join(", "));
    println!();

    Ok(())
}
