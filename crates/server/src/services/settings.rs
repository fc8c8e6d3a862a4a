//! Shop settings access and default seeding.

use std::sync::Arc;

use tracing::instrument;

use sales_pop_core::{SettingsPatch, ShopId, ShopSettings};

use crate::store::{SettingsStore, StoreError};

/// Read and write per-shop popup configuration.
#[derive(Clone)]
pub struct SettingsService {
    settings: Arc<dyn SettingsStore>,
}

impl SettingsService {
    /// Create a new settings service.
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Fetch a shop's settings document, `None` when never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn get(&self, shop_id: &ShopId) -> Result<Option<ShopSettings>, StoreError> {
        self.settings.get(shop_id).await
    }

    /// Fetch a shop's settings, seeding the default configuration on first
    /// access. This is the single seeding call site - callers must not
    /// write their own defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or the seeding write fails.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn get_or_seed(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
    ) -> Result<ShopSettings, StoreError> {
        if let Some(existing) = self.settings.get(shop_id).await? {
            return Ok(existing);
        }

        tracing::info!("Seeding default settings");
        let defaults = ShopSettings::seed_defaults(shop_id.clone(), shop_domain);
        let patch = SettingsPatch::from_settings(&defaults);
        self.settings
            .upsert_merge(shop_id, shop_domain, &patch)
            .await
    }

    /// Merge-upsert a settings patch; fields absent from the patch are
    /// preserved on the stored document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self, patch), fields(shop_id = %shop_id))]
    pub async fn save(
        &self,
        shop_id: &ShopId,
        shop_domain: &str,
        patch: &SettingsPatch,
    ) -> Result<ShopSettings, StoreError> {
        self.settings
            .upsert_merge(shop_id, shop_domain, patch)
            .await
    }
}
