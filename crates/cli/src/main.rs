//! Sales Pop CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! sales-pop migrate
//!
//! # Register a shop credential record (stand-in for the install handshake)
//! sales-pop shop add --domain s1.myshopify.com --shop-id shop-1 --token shpat_xxx
//!
//! # Seed demo settings and notification documents
//! sales-pop seed --shops 5 --notifications 3
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `shop add` - Register a shop and its Admin API token
//! - `seed` - Seed database with demo data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sales-pop")]
#[command(author, version, about = "Sales Pop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage shop records
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Seed the database with demo data
    Seed {
        /// Number of shops to create
        #[arg(long, default_value_t = 5)]
        shops: u32,

        /// Notifications per shop
        #[arg(long, default_value_t = 3)]
        notifications: u32,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// Register a shop and its Admin API access token
    Add {
        /// Shop domain (e.g., your-store.myshopify.com)
        #[arg(short, long)]
        domain: String,

        /// Shop ID
        #[arg(short, long)]
        shop_id: String,

        /// Admin API access token
        #[arg(short, long)]
        token: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Shop { action } => match action {
            ShopAction::Add {
                domain,
                shop_id,
                token,
            } => {
                commands::shop::add(&domain, &shop_id, &token).await?;
            }
        },
        Commands::Seed {
            shops,
            notifications,
        } => {
            commands::seed::run(shops, notifications).await?;
        }
    }
    Ok(())
}
