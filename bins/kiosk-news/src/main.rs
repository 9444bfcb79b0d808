//! Kiosk news - news reader for the terminal
//!
//! Lists top stories per section and reads full articles, with the body
//! extracted from the story page's structured data.

use clap::{Parser, Subcommand};
use kiosk_core::config::Config;
use kiosk_news_client::{NewsClient, NewsConfig};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{health, read, sections, top};

/// News reader
#[derive(Parser)]
#[command(name = "kiosk-news")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Path to the kiosk configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known section slugs
    Sections,

    /// Show the top stories of a section
    Top {
        /// Section slug (configured default if omitted)
        section: Option<String>,

        /// Maximum stories to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Read one story in full
    Read {
        /// Section slug
        section: Option<String>,

        /// 1-based story index within the section's top stories
        index: Option<usize>,

        /// Read directly from a story URL instead
        #[arg(long, conflicts_with_all = ["section", "index"])]
        url: Option<String>,
    },

    /// Check that the news API is reachable
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("kiosk_news=debug,kiosk_news_client=debug")
            .init();
    }

    let (client, default_section) = match build_client(&cli) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Sections => sections::run(&cli.format),

        Commands::Top { section, limit } => {
            let section = section.unwrap_or_else(|| default_section.clone());
            top::run(&client, &section, limit, &cli.format).await
        }

        Commands::Read { section, index, url } => match (url, section, index) {
            (Some(url), _, _) => read::run_url(&client, &url, &cli.format).await,
            (None, section, index) => {
                let section = section.unwrap_or_else(|| default_section.clone());
                read::run_index(&client, &section, index.unwrap_or(1), &cli.format).await
            }
        },

        Commands::Health => health::run(&client, &cli.format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Build the client: environment first, config file filling the gaps
fn build_client(cli: &Cli) -> anyhow::Result<(NewsClient, String)> {
    let file = Config::load(cli.config.as_deref())?;
    let mut config = NewsConfig::from_env()?;

    if let Some(url) = &file.schema.news.base_url {
        if std::env::var("KIOSK_NEWS_URL").is_err() {
            config.base_url = url.clone();
        }
    }
    if config.api_key.is_none() {
        config.api_key = file.schema.news.api_key.clone();
    }

    let client = NewsClient::with_config(config)?;
    Ok((client, file.schema.news.default_section))
}
