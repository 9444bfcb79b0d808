//! Kiosk forms - form-filling exercise for the terminal
//!
//! Loads a declarative form definition (TOML) and prompts for each line,
//! validating answers and re-prompting until they pass.

use clap::Parser;
use kiosk_cli::output::Status;
use kiosk_core::config::Config;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod form;

use form::FormDefinition;

/// Form-filling exercise
#[derive(Parser)]
#[command(name = "kiosk-forms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML form definition (built-in form if omitted)
    #[arg(short = 'F', long)]
    file: Option<PathBuf>,

    /// Path to the kiosk configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

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
            .with_env_filter("kiosk_forms=debug")
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let form = load_form(cli)?;

    if let Some(title) = &form.title {
        Status::header(title);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut answers: Vec<(String, String)> = Vec::new();

    for line in &form.lines {
        let value = prompt_line(&mut input, line)?;
        answers.push((line.name.clone(), value));
    }

    print_answers(&answers, &cli.format)?;
    Ok(())
}

/// Resolve the form definition: `--file`, then the configured default,
/// then the built-in form.
fn load_form(cli: &Cli) -> anyhow::Result<FormDefinition> {
    let configured = Config::load(cli.config.as_deref())?
        .schema
        .forms
        .definition
        .map(PathBuf::from);

    match cli.file.clone().or(configured) {
        Some(path) => load_form_file(&path),
        None => Ok(FormDefinition::default_form()),
    }
}

fn load_form_file(path: &Path) -> anyhow::Result<FormDefinition> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    FormDefinition::from_toml(&text)
}

/// Prompt for one line until the answer validates
fn prompt_line(input: &mut impl BufRead, line: &form::FormLine) -> anyhow::Result<String> {
    loop {
        print!("{} {}: ", line.name.bold(), format!("({})", line.hint).dimmed());
        io::stdout().flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            anyhow::bail!("input ended before the form was complete");
        }
        let answer = answer.trim().to_string();

        let result = line.validate(&answer);
        if result.is_valid() {
            return Ok(answer);
        }

        for error in result.errors() {
            Status::error(&error.to_string());
        }
    }
}

fn print_answers(answers: &[(String, String)], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        let object: serde_json::Map<String, serde_json::Value> = answers
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect();
        println!("{}", serde_json::to_string_pretty(&object)?);
        return Ok(());
    }

    Status::header("Answers");
    for (name, value) in answers {
        Status::detail(name, value);
    }
    Ok(())
}
