//! Integration test support for Sales Pop.
//!
//! Builds the services over the in-memory store adapter, so tests exercise
//! the full service layer without a database or network.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use sales_pop_core::{NotificationRecord, ShopId};
use sales_pop_server::services::{NotificationService, SettingsService, WidgetService};
use sales_pop_server::shopify::SyncClient;
use sales_pop_server::store::{MemoryStore, ShopRecord, ShopStore as _};

/// The service stack wired to one shared in-memory store.
pub struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub notifications: NotificationService,
    pub settings: SettingsService,
    pub widget: WidgetService,
}

impl TestHarness {
    /// Build a fresh harness with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let notifications = NotificationService::new(
            store.clone(),
            store.clone(),
            SyncClient::new("2025-04"),
        );
        let settings = SettingsService::new(store.clone());
        let widget = WidgetService::new(store.clone(), store.clone());

        Self {
            store,
            notifications,
            settings,
            widget,
        }
    }

    /// Register a shop credential record.
    pub async fn register_shop(&self, shop_id: &str, shop_domain: &str) {
        self.store
            .upsert(&ShopRecord {
                shop_id: ShopId::new(shop_id),
                shop_domain: shop_domain.to_string(),
                access_token: SecretString::from("shpat_test_token"),
            })
            .await
            .expect("register shop");
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a notification record with the given id and timestamp.
#[must_use]
pub fn record(id: &str, timestamp: &str) -> NotificationRecord {
    let timestamp: DateTime<Utc> = timestamp.parse().expect("valid timestamp");
    NotificationRecord {
        id: id.to_string(),
        first_name: "Jane".to_string(),
        city: "London".to_string(),
        country: "United Kingdom".to_string(),
        product_name: "Leather Bag".to_string(),
        product_id: "42".to_string(),
        product_image: String::new(),
        timestamp,
    }
}
