//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod shop;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store error: {0}")]
    Store(#[from] sales_pop_server::store::StoreError),
}

/// Connect to the database named by `SALES_POP_DATABASE_URL` (or
/// `DATABASE_URL`).
async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("SALES_POP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("SALES_POP_DATABASE_URL"))?;

    Ok(sales_pop_server::store::create_pool(&SecretString::from(database_url)).await?)
}
