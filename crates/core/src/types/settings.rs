//! Per-shop popup display and trigger settings.

use serde::{Deserialize, Serialize};

use super::ShopId;

/// Screen corner the popup is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupPosition {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

/// Which storefront pages the popup may appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagesRestriction {
    /// Show on all pages (excluded URLs still apply).
    #[default]
    All,
    /// Show only on the URLs listed in `included_urls`.
    Specific,
}

/// A shop's popup configuration - one document per shop, keyed by shop ID.
///
/// Upserted with merge semantics: a save only touches the fields present in
/// the patch. Fields missing from a stored document deserialize to their
/// defaults, so partially-written documents stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub shop_id: ShopId,
    pub shop_domain: String,
    #[serde(default)]
    pub position: PopupPosition,
    /// Hide the "x minutes ago" line under the popup text.
    #[serde(default)]
    pub hide_time_ago: bool,
    /// Truncate long product names to fit the popup.
    #[serde(default = "default_true")]
    pub truncate_content: bool,
    /// Seconds each popup stays on screen.
    #[serde(default = "default_display_duration")]
    pub display_duration: u32,
    /// Seconds before the first popup appears.
    #[serde(default = "default_first_delay")]
    pub first_delay: u32,
    /// Seconds between consecutive popups.
    #[serde(default = "default_gap_time")]
    pub gap_time: u32,
    /// Maximum popups shown per page view.
    #[serde(default = "default_max_popups")]
    pub max_popups: u32,
    #[serde(default)]
    pub pages_restriction: PagesRestriction,
    /// Newline-separated URLs to show the popup on (`Specific` mode only).
    #[serde(default)]
    pub included_urls: String,
    /// Newline-separated URLs to never show the popup on.
    #[serde(default)]
    pub excluded_urls: String,
}

const fn default_true() -> bool {
    true
}

const fn default_display_duration() -> u32 {
    5
}

const fn default_first_delay() -> u32 {
    10
}

const fn default_gap_time() -> u32 {
    2
}

const fn default_max_popups() -> u32 {
    20
}

impl ShopSettings {
    /// The configuration seeded for a shop on first access.
    #[must_use]
    pub fn seed_defaults(shop_id: ShopId, shop_domain: impl Into<String>) -> Self {
        Self {
            shop_id,
            shop_domain: shop_domain.into(),
            position: PopupPosition::BottomLeft,
            hide_time_ago: false,
            truncate_content: true,
            display_duration: default_display_duration(),
            first_delay: default_first_delay(),
            gap_time: default_gap_time(),
            max_popups: default_max_popups(),
            pages_restriction: PagesRestriction::All,
            included_urls: String::new(),
            excluded_urls: String::new(),
        }
    }
}

/// A partial settings update from the admin UI.
///
/// Fields left as `None` are preserved on the stored document. Serializes
/// with absent fields skipped, so the JSON form is exactly the set of
/// touched keys (the document stores merge on top-level keys).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PopupPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_time_ago: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_popups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_restriction: Option<PagesRestriction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_urls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_urls: Option<String>,
}

impl SettingsPatch {
    /// A patch carrying every field of a settings document, used to write a
    /// complete document (e.g., when seeding defaults).
    #[must_use]
    pub fn from_settings(settings: &ShopSettings) -> Self {
        Self {
            position: Some(settings.position),
            hide_time_ago: Some(settings.hide_time_ago),
            truncate_content: Some(settings.truncate_content),
            display_duration: Some(settings.display_duration),
            first_delay: Some(settings.first_delay),
            gap_time: Some(settings.gap_time),
            max_popups: Some(settings.max_popups),
            pages_restriction: Some(settings.pages_restriction),
            included_urls: Some(settings.included_urls.clone()),
            excluded_urls: Some(settings.excluded_urls.clone()),
        }
    }

    /// Apply the patch to a settings document, field by field.
    pub fn apply(&self, settings: &mut ShopSettings) {
        if let Some(v) = self.position {
            settings.position = v;
        }
        if let Some(v) = self.hide_time_ago {
            settings.hide_time_ago = v;
        }
        if let Some(v) = self.truncate_content {
            settings.truncate_content = v;
        }
        if let Some(v) = self.display_duration {
            settings.display_duration = v;
        }
        if let Some(v) = self.first_delay {
            settings.first_delay = v;
        }
        if let Some(v) = self.gap_time {
            settings.gap_time = v;
        }
        if let Some(v) = self.max_popups {
            settings.max_popups = v;
        }
        if let Some(v) = self.pages_restriction {
            settings.pages_restriction = v;
        }
        if let Some(v) = &self.included_urls {
            settings.included_urls = v.clone();
        }
        if let Some(v) = &self.excluded_urls {
            settings.excluded_urls = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_match_contract() {
        let settings = ShopSettings::seed_defaults(ShopId::new("s1"), "s1.myshopify.com");

        assert_eq!(settings.position, PopupPosition::BottomLeft);
        assert!(!settings.hide_time_ago);
        assert!(settings.truncate_content);
        assert_eq!(settings.display_duration, 5);
        assert_eq!(settings.first_delay, 10);
        assert_eq!(settings.gap_time, 2);
        assert_eq!(settings.max_popups, 20);
        assert_eq!(settings.pages_restriction, PagesRestriction::All);
        assert_eq!(settings.included_urls, "");
        assert_eq!(settings.excluded_urls, "");
    }

    #[test]
    fn test_position_serializes_kebab_case() {
        let json = serde_json::to_string(&PopupPosition::BottomLeft).expect("serialize");
        assert_eq!(json, "\"bottom-left\"");

        let pos: PopupPosition = serde_json::from_str("\"top-right\"").expect("deserialize");
        assert_eq!(pos, PopupPosition::TopRight);
    }

    #[test]
    fn test_patch_apply_preserves_untouched_fields() {
        let mut settings = ShopSettings::seed_defaults(ShopId::new("s1"), "s1.myshopify.com");
        let patch = SettingsPatch {
            display_duration: Some(12),
            ..SettingsPatch::default()
        };

        patch.apply(&mut settings);

        assert_eq!(settings.display_duration, 12);
        assert_eq!(settings.position, PopupPosition::BottomLeft);
        assert_eq!(settings.max_popups, 20);
    }

    #[test]
    fn test_patch_serializes_only_touched_keys() {
        let patch = SettingsPatch {
            hide_time_ago: Some(true),
            ..SettingsPatch::default()
        };

        let json = serde_json::to_value(&patch).expect("serialize");
        let obj = json.as_object().expect("object");
        assert_eq!(obj.len(), 1);
        assert_eq!(json["hideTimeAgo"], true);
    }

    #[test]
    fn test_partial_document_deserializes_with_defaults() {
        // A document written before new fields existed still reads cleanly.
        let json = serde_json::json!({
            "shopId": "s1",
            "shopDomain": "s1.myshopify.com",
            "displayDuration": 8
        });

        let settings: ShopSettings = serde_json::from_value(json).expect("deserialize");
        assert_eq!(settings.display_duration, 8);
        assert_eq!(settings.max_popups, 20);
        assert!(settings.truncate_content);
    }

    #[test]
    fn test_full_settings_wire_format() {
        let settings = ShopSettings::seed_defaults(ShopId::new("s1"), "s1.myshopify.com");
        let json = serde_json::to_value(&settings).expect("serialize");

        assert_eq!(json["position"], "bottom-left");
        assert_eq!(json["pagesRestriction"], "all");
        assert_eq!(json["truncateContent"], true);
        assert_eq!(json["maxPopups"], 20);
    }
}
