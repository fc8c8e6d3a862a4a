//! In-memory store adapter for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use sales_pop_core::{NotificationDocument, NotificationRecord, SettingsPatch, ShopId, ShopSettings};

use super::{NotificationStore, SettingsStore, ShopRecord, ShopStore, StoreError};

/// Store adapter holding all documents in process memory.
#[derive(Default)]
pub struct MemoryStore {
    settings: RwLock<HashMap<ShopId, ShopSettings>>,
    notifications: RwLock<HashMap<String, NotificationDocument>>,
    shops: RwLock<HashMap<String, ShopRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, shop_id: &ShopId) -> Result<Option<ShopSettings>, StoreError> {
        Ok(self.settings.read().await.get(shop_id).cloned())
    }

    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopSettings>, StoreError> {
        Ok(self
            .settings
            .read()
            .await
            .values()
            .find(|s| s.shop_domain == shop_domain)
            .cloned())
    }

    async fn upsert_merge(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        patch: &SettingsPatch,
    ) -> Result<ShopSettings, StoreError> {
        let mut settings = self.settings.write().await;
        let entry = settings
            .entry(shop_id.clone())
            .or_insert_with(|| ShopSettings::seed_defaults(shop_id.clone(), shop_domain));
        entry.shop_domain = shop_domain.to_string();
        patch.apply(entry);
        Ok(entry.clone())
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn get(&self, shop_domain: &str) -> Result<Option<NotificationDocument>, StoreError> {
        Ok(self.notifications.read().await.get(shop_domain).cloned())
    }

    async fn replace_items(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        items: Vec<NotificationRecord>,
    ) -> Result<(), StoreError> {
        self.notifications.write().await.insert(
            shop_domain.to_string(),
            NotificationDocument {
                shop_id: shop_id.clone(),
                shop_domain: shop_domain.to_string(),
                last_sync: Some(Utc::now()),
                items,
            },
        );
        Ok(())
    }

    async fn remove_item(&self, shop_domain: &str, id: &str) -> Result<bool, StoreError> {
        let mut notifications = self.notifications.write().await;
        let Some(doc) = notifications.get_mut(shop_domain) else {
            return Ok(false);
        };

        let before = doc.items.len();
        doc.items.retain(|item| item.id != id);
        Ok(doc.items.len() != before)
    }
}

#[async_trait]
impl ShopStore for MemoryStore {
    async fn get_by_domain(&self, shop_domain: &str) -> Result<Option<ShopRecord>, StoreError> {
        Ok(self.shops.read().await.get(shop_domain).cloned())
    }

    async fn upsert(&self, record: &ShopRecord) -> Result<(), StoreError> {
        self.shops
            .write()
            .await
            .insert(record.shop_domain.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settings_merge_preserves_existing_fields() {
        let store = MemoryStore::new();
        let shop_id = ShopId::new("s1");

        let first = SettingsPatch {
            position: Some(sales_pop_core::PopupPosition::TopRight),
            ..SettingsPatch::default()
        };
        store
            .upsert_merge(&shop_id, "s1.myshopify.com", &first)
            .await
            .expect("first upsert");

        let second = SettingsPatch {
            display_duration: Some(12),
            ..SettingsPatch::default()
        };
        let merged = store
            .upsert_merge(&shop_id, "s1.myshopify.com", &second)
            .await
            .expect("second upsert");

        assert_eq!(merged.display_duration, 12);
        assert_eq!(merged.position, sales_pop_core::PopupPosition::TopRight);
    }

    #[tokio::test]
    async fn test_remove_item_unknown_shop_is_noop() {
        let store = MemoryStore::new();
        let removed = store
            .remove_item("nobody.myshopify.com", "x")
            .await
            .expect("remove");
        assert!(!removed);
    }
}
