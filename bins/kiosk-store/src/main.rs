//! Kiosk store - shoe storefront client for the terminal
//!
//! Browse the catalog, manage the cart and favorites, check out, and read
//! back the purchase history. Everything except browsing requires a login.

use clap::{Parser, Subcommand};
use kiosk_core::config::Config;
use kiosk_store_client::{StoreClient, StoreConfig};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{cart, checkout, fav, health, history, login, products, register, show};

/// Shoe storefront client
#[derive(Parser)]
#[command(name = "kiosk-store")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Account email (also read from the configuration file)
    #[arg(short, long, global = true, env = "KIOSK_STORE_EMAIL")]
    email: Option<String>,

    /// Account password
    #[arg(short, long, global = true, env = "KIOSK_STORE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

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
    /// Create an account and its profile
    Register,

    /// Check the configured credentials
    Login,

    /// List the catalog
    Products {
        /// Only one audience (men, women, kids)
        #[arg(short, long)]
        audience: Option<String>,
    },

    /// Show one article in detail
    Show {
        /// Catalog id of the article
        id: i64,
    },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: cart::CartAction,
    },

    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: fav::FavAction,
    },

    /// Check out the current cart
    Checkout,

    /// Show the purchase history
    History,

    /// Check that the storefront API is reachable
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("kiosk_store=debug,kiosk_store_client=debug")
            .init();
    }

    let context = match AppContext::build(&cli) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Register => register::run(&context).await,
        Commands::Login => login::run(&context).await,
        Commands::Products { ref audience } => {
            products::run(&context, audience.as_deref()).await
        }
        Commands::Show { id } => show::run(&context, id).await,
        Commands::Cart { ref action } => cart::run(&context, action).await,
        Commands::Fav { ref action } => fav::run(&context, action).await,
        Commands::Checkout => checkout::run(&context).await,
        Commands::History => history::run(&context).await,
        Commands::Health => health::run(&context).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Client plus the resolved credentials and output format
pub struct AppContext {
    pub client: StoreClient,
    pub email: Option<String>,
    pub password: Option<String>,
    pub format: String,
}

impl AppContext {
    /// Build the context: environment first, config file filling the gaps
    fn build(cli: &Cli) -> anyhow::Result<Self> {
        let file = Config::load(cli.config.as_deref())?;
        let mut config = StoreConfig::from_env()?;

        if let Some(url) = &file.schema.store.base_url {
            if std::env::var("KIOSK_STORE_URL").is_err() {
                config.base_url = url.clone();
            }
        }

        let email = cli.email.clone().or_else(|| file.schema.store.email.clone());

        Ok(Self {
            client: StoreClient::with_config(config)?,
            email,
            password: cli.password.clone(),
            format: cli.format.clone(),
        })
    }

    /// The account email, or the error explaining how to set it
    pub fn require_email(&self) -> anyhow::Result<&str> {
        self.email
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no account email: pass --email or set KIOSK_STORE_EMAIL"))
    }

    /// Log in with the configured credentials and install the session
    pub async fn ensure_session(&self) -> anyhow::Result<&str> {
        if self.client.is_authenticated() {
            return self.require_email();
        }

        let email = self.require_email()?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no password: pass --password or set KIOSK_STORE_PASSWORD"))?;

        let session = self.client.auth().login(email, password).await?;
        self.client.set_session(session);
        Ok(self.require_email()?)
    }
}
