//! Notification sync, listing, and deletion.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use sales_pop_core::NotificationRecord;

use crate::shopify::{ShopifyError, SyncClient};
use crate::store::{NotificationStore, ShopStore, StoreError};

/// Errors that can occur while syncing orders into notifications.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The shop has no credential record - it never completed installation.
    #[error("shop not found: {0}")]
    ShopNotFound(String),

    /// The upstream orders fetch failed.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// Writing the synced document failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates fetch, normalize, and store for sales notifications.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
    shops: Arc<dyn ShopStore>,
    shopify: SyncClient,
}

impl NotificationService {
    /// Create a new notification service.
    #[must_use]
    pub fn new(
        notifications: Arc<dyn NotificationStore>,
        shops: Arc<dyn ShopStore>,
        shopify: SyncClient,
    ) -> Self {
        Self {
            notifications,
            shops,
            shopify,
        }
    }

    /// Pull recent orders for a shop and replace its stored notifications.
    ///
    /// The stored items array is fully replaced, not merged, and `lastSync`
    /// is stamped. Returns the synced records (newest first as the API
    /// returned them).
    ///
    /// # Errors
    ///
    /// Returns `SyncError::ShopNotFound` when the shop has no credential
    /// record, and propagates upstream and store failures.
    #[instrument(skip(self), fields(shop = %shop_domain))]
    pub async fn sync(&self, shop_domain: &str) -> Result<Vec<NotificationRecord>, SyncError> {
        let shop = self
            .shops
            .get_by_domain(shop_domain)
            .await?
            .ok_or_else(|| SyncError::ShopNotFound(shop_domain.to_string()))?;

        let records = self
            .shopify
            .recent_orders(shop_domain, &shop.access_token)
            .await?;

        self.notifications
            .replace_items(&shop.shop_id, shop_domain, records.clone())
            .await?;

        tracing::info!(count = records.len(), "Synced orders into notifications");
        Ok(records)
    }

    /// List a shop's notifications, most recent first.
    ///
    /// Returns an empty vec when the shop has never synced.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    #[instrument(skip(self), fields(shop = %shop_domain))]
    pub async fn list(&self, shop_domain: &str) -> Result<Vec<NotificationRecord>, StoreError> {
        let doc = self.notifications.get(shop_domain).await?;
        Ok(doc.map(|d| d.items_sorted()).unwrap_or_default())
    }

    /// Delete a notification by id.
    ///
    /// Idempotent: an absent document or unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write-back fails.
    #[instrument(skip(self), fields(shop = %shop_domain, id = %id))]
    pub async fn delete(&self, shop_domain: &str, id: &str) -> Result<(), StoreError> {
        let removed = self.notifications.remove_item(shop_domain, id).await?;
        if !removed {
            tracing::debug!("Delete matched no stored notification");
        }
        Ok(())
    }
}
