//! `PostgreSQL` store adapter.
//!
//! Each collection is a table with a JSONB document column keyed by shop.
//! Settings merges use the JSONB `||` operator (top-level key merge), which
//! matches the merge-upsert contract for these flat documents. Notification
//! item removal is a read-modify-write of the array; concurrent writers to
//! the same shop race under last-write-wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use sales_pop_core::{NotificationDocument, NotificationRecord, SettingsPatch, ShopId, ShopSettings};

use super::{NotificationStore, SettingsStore, ShopRecord, ShopStore, StoreError};

/// Store adapter backed by the `PostgreSQL` document tables.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// Internal row types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    shop_id: String,
    items: JsonValue,
    last_sync: Option<DateTime<Utc>>,
}

impl NotificationRow {
    fn into_document(self, shop_domain: &str) -> Result<NotificationDocument, StoreError> {
        let items: Vec<NotificationRecord> = serde_json::from_value(self.items)?;
        Ok(NotificationDocument {
            shop_id: ShopId::new(self.shop_id),
            shop_domain: shop_domain.to_string(),
            last_sync: self.last_sync,
            items,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ShopRow {
    shop_id: String,
    shop_domain: String,
    access_token: String,
}

impl From<ShopRow> for ShopRecord {
    fn from(row: ShopRow) -> Self {
        Self {
            shop_id: ShopId::new(row.shop_id),
            shop_domain: row.shop_domain,
            access_token: SecretString::from(row.access_token),
        }
    }
}

// =============================================================================
// SettingsStore
// =============================================================================

#[async_trait]
impl SettingsStore for PostgresStore {
    async fn get(&self, shop_id: &ShopId) -> Result<Option<ShopSettings>, StoreError> {
        let doc = sqlx::query_scalar::<_, JsonValue>(
            "SELECT doc FROM shop_settings WHERE shop_id = $1",
        )
        .bind(shop_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        doc.map(serde_json::from_value).transpose().map_err(Into::into)
    }

    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopSettings>, StoreError> {
        let doc = sqlx::query_scalar::<_, JsonValue>(
            "SELECT doc FROM shop_settings WHERE shop_domain = $1 LIMIT 1",
        )
        .bind(shop_domain)
        .fetch_optional(&self.pool)
        .await?;

        doc.map(serde_json::from_value).transpose().map_err(Into::into)
    }

    async fn upsert_merge(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        patch: &SettingsPatch,
    ) -> Result<ShopSettings, StoreError> {
        // The written value always carries the identity keys so a fresh
        // document deserializes even from a partial first patch.
        let mut doc = serde_json::to_value(patch)?;
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("shopId".to_string(), JsonValue::from(shop_id.as_str()));
            obj.insert("shopDomain".to_string(), JsonValue::from(shop_domain));
        }

        let merged = sqlx::query_scalar::<_, JsonValue>(
            r"
            INSERT INTO shop_settings (shop_id, shop_domain, doc)
            VALUES ($1, $2, $3)
            ON CONFLICT (shop_id) DO UPDATE
            SET doc = shop_settings.doc || EXCLUDED.doc,
                shop_domain = EXCLUDED.shop_domain,
                updated_at = NOW()
            RETURNING doc
            ",
        )
        .bind(shop_id.as_str())
        .bind(shop_domain)
        .bind(doc)
        .fetch_one(&self.pool)
        .await?;

        Ok(serde_json::from_value(merged)?)
    }
}

// =============================================================================
// NotificationStore
// =============================================================================

#[async_trait]
impl NotificationStore for PostgresStore {
    async fn get(&self, shop_domain: &str) -> Result<Option<NotificationDocument>, StoreError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r"
            SELECT shop_id, items, last_sync
            FROM shop_notifications
            WHERE shop_domain = $1
            ",
        )
        .bind(shop_domain)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_document(shop_domain)).transpose()
    }

    async fn replace_items(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        items: Vec<NotificationRecord>,
    ) -> Result<(), StoreError> {
        let items = serde_json::to_value(&items)?;

        sqlx::query(
            r"
            INSERT INTO shop_notifications (shop_domain, shop_id, items, last_sync)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (shop_domain) DO UPDATE
            SET shop_id = EXCLUDED.shop_id,
                items = EXCLUDED.items,
                last_sync = NOW(),
                updated_at = NOW()
            ",
        )
        .bind(shop_domain)
        .bind(shop_id.as_str())
        .bind(items)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_item(&self, shop_domain: &str, id: &str) -> Result<bool, StoreError> {
        let Some(items) = sqlx::query_scalar::<_, JsonValue>(
            "SELECT items FROM shop_notifications WHERE shop_domain = $1",
        )
        .bind(shop_domain)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(false);
        };

        let items: Vec<NotificationRecord> = serde_json::from_value(items)?;
        let before = items.len();
        let filtered: Vec<NotificationRecord> =
            items.into_iter().filter(|item| item.id != id).collect();

        if filtered.len() == before {
            return Ok(false);
        }

        sqlx::query(
            r"
            UPDATE shop_notifications
            SET items = $2, updated_at = NOW()
            WHERE shop_domain = $1
            ",
        )
        .bind(shop_domain)
        .bind(serde_json::to_value(&filtered)?)
        .execute(&self.pool)
        .await?;

        Ok(true)
    }
}

// =============================================================================
// ShopStore
// =============================================================================

#[async_trait]
impl ShopStore for PostgresStore {
    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopRecord>, StoreError> {
        let row = sqlx::query_as::<_, ShopRow>(
            r"
            SELECT shop_id, shop_domain, access_token
            FROM shops
            WHERE shop_domain = $1
            ",
        )
        .bind(shop_domain)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ShopRecord::from))
    }

    async fn upsert(&self, record: &ShopRecord) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO shops (shop_domain, shop_id, access_token)
            VALUES ($1, $2, $3)
            ON CONFLICT (shop_domain) DO UPDATE
            SET shop_id = EXCLUDED.shop_id,
                access_token = EXCLUDED.access_token,
                updated_at = NOW()
            ",
        )
        .bind(&record.shop_domain)
        .bind(record.shop_id.as_str())
        .bind(record.access_token.expose_secret())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
