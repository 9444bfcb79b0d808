//! Check out the current cart
//!
//! Prefills the contact block from the stored profile, collects the
//! payment data interactively, validates everything client-side, and only
//! then writes the purchase.

use crate::commands::{prompt, prompt_with_default};
use crate::AppContext;
use anyhow::Result;
use chrono::Utc;
use kiosk_cli::output::{format_price, Status};
use kiosk_core::validation::{validate_card, validate_mbway, ValidationResult, Validator};
use kiosk_store_client::endpoints::cart;
use kiosk_store_client::endpoints::purchases::{PaymentMethod, Purchase};

pub async fn run(context: &AppContext) -> Result<()> {
    let email = context.ensure_session().await?.to_string();

    let items = context.client.cart().items(&email).await?;
    if items.is_empty() {
        anyhow::bail!("the cart is empty");
    }

    Status::header("Checkout");
    for item in &items {
        println!(
            "  {:<24} {:<8} x{:<3} {:>10}",
            item.name,
            item.size,
            item.quantity,
            format_price(item.price * f64::from(item.quantity))
        );
    }
    println!("  total: {}", format_price(cart::total(&items)));
    println!();

    // Contact block, prefilled from the profile when one exists.
    let profile = context.client.users().get_by_email(&email).await?;
    let (name, phone, address, postal_code) = match profile {
        Some(p) => (
            prompt_with_default("Name", &p.name)?,
            prompt_with_default("Phone", &p.phone)?,
            prompt_with_default("Address", &p.address)?,
            prompt_with_default("Postal code", &p.postal_code)?,
        ),
        None => (
            prompt("Name")?,
            prompt("Phone")?,
            prompt("Address")?,
            prompt("Postal code (0000-000)")?,
        ),
    };

    contact_validation(&name, &phone, &address, &postal_code).to_result()?;

    // Payment block.
    let method = loop {
        let answer = prompt_with_default("Payment method (card, mbway)", "card")?;
        match answer.to_lowercase().as_str() {
            "card" | "credit-card" => break PaymentMethod::CreditCard,
            "mbway" | "mb-way" => break PaymentMethod::MbWay,
            other => Status::error(&format!("unknown payment method '{other}'")),
        }
    };

    let (card_number, cvv, mbway_phone) = match method {
        PaymentMethod::CreditCard => {
            let number = prompt("Card number")?.replace('-', "");
            let cvv = prompt("CVV")?;
            validate_card(&number, &cvv).to_result()?;
            (Some(number), Some(cvv), None)
        }
        PaymentMethod::MbWay => {
            let phone = prompt("MB Way phone")?;
            validate_mbway(&phone).to_result()?;
            (None, None, Some(phone))
        }
    };

    let purchase = Purchase {
        user_email: email.clone(),
        name,
        phone,
        address,
        postal_code,
        payment_method: method,
        card_number,
        cvv,
        mbway_phone,
        purchase_date: Utc::now(),
        cart_items: items,
    };

    let id = context.client.purchases().checkout(&purchase).await?;

    if context.format == "json" {
        println!(
            "{}",
            serde_json::json!({ "purchase_id": id, "total": purchase.total() })
        );
        return Ok(());
    }

    Status::success(&format!(
        "Purchase {id} placed, total {}",
        format_price(purchase.total())
    ));
    Ok(())
}

fn contact_validation(
    name: &str,
    phone: &str,
    address: &str,
    postal_code: &str,
) -> ValidationResult {
    Validator::new()
        .required("name", name)
        .exact_digits("phone", phone, 9)
        .required("address", address)
        .postal_code("postal_code", postal_code)
        .validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation_accepts_complete_block() {
        let result = contact_validation("Ana Martins", "912345678", "Rua das Flores 10", "4470-296");
        assert!(result.is_valid());
    }

    #[test]
    fn test_contact_validation_rejects_bad_phone_and_postal() {
        let result = contact_validation("Ana", "9123", "Rua A", "44-70296");
        assert_eq!(result.errors().len(), 2);
    }
}
