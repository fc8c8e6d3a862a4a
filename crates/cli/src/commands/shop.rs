//! Shop registration command.
//!
//! In production the install handshake writes these records; in development
//! they are registered by hand so the sync pipeline has a credential to use.

use secrecy::SecretString;

use sales_pop_core::ShopId;
use sales_pop_server::store::{PostgresStore, ShopRecord, ShopStore as _};

use super::{CommandError, connect};

/// Register (or update) a shop and its Admin API access token.
///
/// # Errors
///
/// Returns an error when the database is unreachable or the write fails.
pub async fn add(domain: &str, shop_id: &str, token: &str) -> Result<(), CommandError> {
    let pool = connect().await?;
    let store = PostgresStore::new(pool);

    let record = ShopRecord {
        shop_id: ShopId::new(shop_id),
        shop_domain: domain.to_string(),
        access_token: SecretString::from(token.to_string()),
    };

    store.upsert(&record).await?;
    tracing::info!(shop = %domain, "Shop registered");
    Ok(())
}
