//! Create an account and its profile
//!
//! Collects the profile interactively, validates it as a whole, then
//! creates the credential account and writes the profile document.

use crate::commands::{prompt, prompt_with_default};
use crate::AppContext;
use anyhow::Result;
use kiosk_cli::output::Status;
use kiosk_core::validation::Validator;
use kiosk_store_client::endpoints::users::UserProfile;

pub async fn run(context: &AppContext) -> Result<()> {
    Status::header("Create account");

    let name = prompt("Name")?;
    let birth_date = prompt("Birth date (DD/MM/YYYY)")?;
    let phone = prompt("Phone")?;
    let email = match &context.email {
        Some(email) => prompt_with_default("Email", email)?,
        None => prompt("Email")?,
    };
    let password = match &context.password {
        Some(password) => password.clone(),
        None => prompt("Password")?,
    };
    let address = prompt("Address")?;
    let postal_code = prompt("Postal code (0000-000)")?;
    let gender = prompt_with_default("Gender", "unspecified")?;

    Validator::new()
        .required("name", &name)
        .required("birth_date", &birth_date)
        .exact_digits("phone", &phone, 9)
        .email("email", &email)
        .min_length("password", &password, 6)
        .required("address", &address)
        .postal_code("postal_code", &postal_code)
        .validate()
        .to_result()?;

    let session = context.client.auth().register(&email, &password).await?;
    context.client.set_session(session);

    let profile = UserProfile {
        photo_url: None,
        name,
        birth_date,
        phone,
        email: email.clone(),
        address,
        postal_code,
        gender,
    };
    context.client.users().create(&profile).await?;

    if context.format == "json" {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    Status::success(&format!("Account created for {email}"));
    Ok(())
}
