//! Document store ports and adapters.
//!
//! All persistent state lives in two per-shop document collections
//! ("settings" and "notifications") plus the shop credential records. Each
//! collection is modelled as a small trait so services receive their storage
//! explicitly instead of reaching for a shared handle, and so the Postgres
//! backend can be swapped for the in-memory one in tests.

pub mod memory;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use sales_pop_core::{NotificationDocument, NotificationRecord, SettingsPatch, ShopId, ShopSettings};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A shop credential record, created by the install handshake (or the CLI
/// in development) and read by the order-sync pipeline.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopRecord {
    pub shop_id: ShopId,
    pub shop_domain: String,
    /// Admin API access token (redacted in debug output).
    pub access_token: SecretString,
}

impl std::fmt::Debug for ShopRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopRecord")
            .field("shop_id", &self.shop_id)
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Storage for per-shop settings documents.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch a shop's settings document, `None` when never written.
    async fn get(&self, shop_id: &ShopId) -> Result<Option<ShopSettings>, StoreError>;

    /// Fetch a shop's settings document by shop domain (widget lookup path).
    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopSettings>, StoreError>;

    /// Upsert with merge semantics: keys absent from `patch` are preserved.
    /// Returns the merged document.
    async fn upsert_merge(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        patch: &SettingsPatch,
    ) -> Result<ShopSettings, StoreError>;
}

/// Storage for per-shop notification documents.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Fetch a shop's notification document, `None` when never synced.
    async fn get(&self, shop_domain: &str) -> Result<Option<NotificationDocument>, StoreError>;

    /// Replace the entire items array and stamp `last_sync`.
    async fn replace_items(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        items: Vec<NotificationRecord>,
    ) -> Result<(), StoreError>;

    /// Remove every item with the given id by filtering the array and
    /// writing it back. Returns whether anything was removed; an absent
    /// document or unknown id is not an error.
    async fn remove_item(&self, shop_domain: &str, id: &str) -> Result<bool, StoreError>;
}

/// Storage for shop credential records.
#[async_trait]
pub trait ShopStore: Send + Sync {
    /// Look up a shop by its domain.
    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopRecord>, StoreError>;

    /// Register or update a shop record.
    async fn upsert(&self, record: &ShopRecord) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
