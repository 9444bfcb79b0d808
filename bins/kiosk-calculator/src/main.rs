//! Kiosk calculator - integer keypad calculator for the terminal
//!
//! Feeds keypad tokens to the calculator engine, either from the command
//! line (`kiosk-calculator 7 + 3 =`) or interactively.

use clap::Parser;
use kiosk_calc::Calculator;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::debug;

/// Integer keypad calculator
///
/// Keys: digits 0-9, operators + - x ÷ (or * and /), = and C.
/// Without keys on the command line, starts an interactive session.
#[derive(Parser)]
#[command(name = "kiosk-calculator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to press, e.g. `7 + 3 =`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("kiosk_calculator=debug,kiosk_calc=debug")
            .init();
    }

    let result = if cli.keys.is_empty() {
        interactive(&cli.format)
    } else {
        one_shot(&cli.keys, &cli.format)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Press every key given on the command line, then print the result once
fn one_shot(keys: &[String], format: &str) -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    for key in keys {
        press_input(&mut calc, key);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&calc.state())?);
    } else {
        println!("{}", calc.display());
    }
    Ok(())
}

/// Read key lines from stdin until EOF or `q`
fn interactive(format: &str) -> anyhow::Result<()> {
    println!("{}", "kiosk calculator".bold());
    println!("{}", "keys: 0-9  + - x ÷  =  C   (q quits)".dimmed());

    let stdin = io::stdin();
    let mut calc = Calculator::new();

    render(&calc, format)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if matches!(trimmed, "q" | "quit" | "exit") {
            break;
        }

        for key in trimmed.split_whitespace() {
            press_input(&mut calc, key);
        }
        render(&calc, format)?;
    }

    Ok(())
}

/// Feed one whitespace-separated input to the engine
///
/// A multi-character input that is not a token on its own (like `7+3=`)
/// is replayed as its individual characters.
fn press_input(calc: &mut Calculator, input: &str) {
    if calc.press_key(input) {
        return;
    }

    if input.chars().count() > 1 {
        for c in input.chars() {
            if !calc.press_key(c.to_string().as_str()) {
                debug!(key = %c, "Ignored key");
            }
        }
    } else {
        debug!(key = %input, "Ignored key");
    }
}

fn render(calc: &Calculator, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string(&calc.state())?);
    } else {
        let state = calc.state();
        let pending = state
            .operator
            .map(|op| format!("  {}", op).dimmed().to_string())
            .unwrap_or_default();
        println!("{}{}", calc.display().bold(), pending);
    }
    io::stdout().flush()?;
    Ok(())
}
