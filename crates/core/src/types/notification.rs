//! Sales notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShopId;

/// A denormalized record of a recent sale, shown as a popup to storefront
/// visitors.
///
/// Flattened from a Shopify order at sync time: the buyer's first name and
/// default-address location, plus the first line item's product details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Record identifier, derived from the source order's first line item's
    /// product GID. NOT globally unique: two orders for the same product
    /// collide.
    pub id: String,
    /// Buyer first name, or "Someone" when the order has no customer.
    pub first_name: String,
    /// City from the buyer's default address, empty when absent.
    pub city: String,
    /// Country from the buyer's default address, empty when absent.
    pub country: String,
    /// Title of the first line item's product.
    pub product_name: String,
    /// Numeric tail of the product GID, empty when absent.
    pub product_id: String,
    /// Product image URL, empty when absent.
    pub product_image: String,
    /// Order creation time.
    pub timestamp: DateTime<Utc>,
}

/// The per-shop notifications document.
///
/// All of a shop's notifications live in one document as an ordered array,
/// alongside the sync bookkeeping. The array is fully replaced on each sync;
/// deletes filter it by id and write the whole field back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDocument {
    pub shop_id: ShopId,
    pub shop_domain: String,
    /// When the items array was last replaced from the remote API.
    pub last_sync: Option<DateTime<Utc>>,
    pub items: Vec<NotificationRecord>,
}

impl NotificationDocument {
    /// Items sorted descending by timestamp (most recent first).
    #[must_use]
    pub fn items_sorted(&self) -> Vec<NotificationRecord> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }
}
