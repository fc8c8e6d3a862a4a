//! Storefront widget payload assembly.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use sales_pop_core::{NotificationRecord, ShopSettings};

use crate::store::{NotificationStore, SettingsStore, StoreError};

/// The JSON body the script-tag widget fetches on page load.
///
/// When `enabled` is false the widget silently no-ops, so settings and
/// content are omitted entirely.
#[derive(Debug, Serialize)]
pub struct WidgetPayload {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ShopSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<WidgetContent>,
}

/// Popup content for the widget.
#[derive(Debug, Serialize)]
pub struct WidgetContent {
    pub notifications: Vec<NotificationRecord>,
}

/// Builds the public widget payload from the two document collections.
#[derive(Clone)]
pub struct WidgetService {
    settings: Arc<dyn SettingsStore>,
    notifications: Arc<dyn NotificationStore>,
}

impl WidgetService {
    /// Create a new widget service.
    #[must_use]
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        notifications: Arc<dyn NotificationStore>,
    ) -> Self {
        Self {
            settings,
            notifications,
        }
    }

    /// Assemble the widget payload for a storefront domain.
    ///
    /// The widget is enabled only when a settings document exists for the
    /// domain - the shop has installed and configured the app. Unknown
    /// domains get `{enabled: false}` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either read fails.
    #[instrument(skip(self), fields(shop = %shop_domain))]
    pub async fn payload(&self, shop_domain: &str) -> Result<WidgetPayload, StoreError> {
        let Some(settings) = self.settings.get_by_domain(shop_domain).await? else {
            return Ok(WidgetPayload {
                enabled: false,
                settings: None,
                content: None,
            });
        };

        let notifications = self
            .notifications
            .get(shop_domain)
            .await?
            .map(|doc| doc.items_sorted())
            .unwrap_or_default();

        Ok(WidgetPayload {
            enabled: true,
            settings: Some(settings),
            content: Some(WidgetContent { notifications }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_payload_omits_settings_and_content() {
        let payload = WidgetPayload {
            enabled: false,
            settings: None,
            content: None,
        };

        let json = serde_json::to_value(&payload).expect("serialize");
        let obj = json.as_object().expect("object");
        assert_eq!(obj.len(), 1);
        assert_eq!(json["enabled"], false);
    }
}
