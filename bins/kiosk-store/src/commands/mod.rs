//! Subcommand implementations

pub mod cart;
pub mod checkout;
pub mod fav;
pub mod health;
pub mod history;
pub mod login;
pub mod products;
pub mod register;
pub mod show;

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Prompt for one line of input
pub fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}: ", label.bold());
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        anyhow::bail!("input ended");
    }
    Ok(answer.trim().to_string())
}

/// Prompt for one line, falling back to a default when left empty
pub fn prompt_with_default(label: &str, default: &str) -> anyhow::Result<String> {
    print!("{} {}: ", label.bold(), format!("[{default}]").dimmed());
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        anyhow::bail!("input ended");
    }
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}
