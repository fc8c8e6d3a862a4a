//! Response types and normalization for the recent-orders query.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use sales_pop_core::NotificationRecord;

/// The GraphQL document sent to the Admin API.
///
/// One page of the most recent orders, newest first as Shopify returns
/// them, with just enough of the customer and first line item to build a
/// notification record.
pub const RECENT_ORDERS_QUERY: &str = r"
query RecentOrders {
  orders(first: 30) {
    edges {
      node {
        id
        createdAt
        customer {
          firstName
          defaultAddress {
            city
            country
          }
        }
        lineItems(first: 1) {
          nodes {
            title
            product {
              id
            }
            image {
              url
            }
          }
        }
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
pub struct OrdersData {
    pub orders: OrderConnection,
}

#[derive(Debug, Deserialize)]
pub struct OrderConnection {
    pub edges: Vec<OrderEdge>,
}

#[derive(Debug, Deserialize)]
pub struct OrderEdge {
    pub node: OrderNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNode {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer: Option<Customer>,
    pub line_items: LineItemConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: Option<String>,
    pub default_address: Option<Address>,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineItemConnection {
    pub nodes: Vec<LineItem>,
}

#[derive(Debug, Deserialize)]
pub struct LineItem {
    pub title: Option<String>,
    pub product: Option<ProductRef>,
    pub image: Option<ImageRef>,
}

#[derive(Debug, Deserialize)]
pub struct ProductRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageRef {
    pub url: Option<String>,
}

impl OrderNode {
    /// Flatten an order into a notification record.
    ///
    /// Returns `None` for orders with no line items - there is no product
    /// to show a popup for. Missing customer data falls back to "Someone"
    /// with empty location fields; the record id is the first line item's
    /// product GID, so two orders for the same product share an id.
    pub fn into_notification(self) -> Option<NotificationRecord> {
        let item = self.line_items.nodes.into_iter().next()?;

        let (first_name, address) = match self.customer {
            Some(customer) => (customer.first_name, customer.default_address),
            None => (None, None),
        };
        let (city, country) = address
            .map(|a| (a.city.unwrap_or_default(), a.country.unwrap_or_default()))
            .unwrap_or_default();

        let product_gid = item.product.map(|p| p.id).unwrap_or_default();
        let product_id = product_gid
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Some(NotificationRecord {
            id: product_gid,
            first_name: first_name.unwrap_or_else(|| "Someone".to_string()),
            city,
            country,
            product_name: item.title.unwrap_or_else(|| "Product".to_string()),
            product_id,
            product_image: item.image.and_then(|i| i.url).unwrap_or_default(),
            timestamp: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: serde_json::Value) -> OrderNode {
        serde_json::from_value(json).expect("valid order node")
    }

    #[test]
    fn test_full_order_maps_to_record() {
        let record = node(serde_json::json!({
            "id": "gid://shopify/Order/1001",
            "createdAt": "2026-05-01T12:00:00Z",
            "customer": {
                "firstName": "Jane",
                "defaultAddress": {"city": "London", "country": "United Kingdom"}
            },
            "lineItems": {
                "nodes": [{
                    "title": "Leather Bag",
                    "product": {"id": "gid://shopify/Product/42"},
                    "image": {"url": "https://cdn.example.com/bag.jpg"}
                }]
            }
        }))
        .into_notification()
        .expect("record");

        assert_eq!(record.id, "gid://shopify/Product/42");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.city, "London");
        assert_eq!(record.country, "United Kingdom");
        assert_eq!(record.product_name, "Leather Bag");
        assert_eq!(record.product_id, "42");
        assert_eq!(record.product_image, "https://cdn.example.com/bag.jpg");
        assert_eq!(record.timestamp.to_rfc3339(), "2026-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_missing_customer_defaults_to_someone() {
        let record = node(serde_json::json!({
            "id": "gid://shopify/Order/1002",
            "createdAt": "2026-05-01T12:00:00Z",
            "customer": null,
            "lineItems": {
                "nodes": [{
                    "title": "Sneakers",
                    "product": {"id": "gid://shopify/Product/7"},
                    "image": null
                }]
            }
        }))
        .into_notification()
        .expect("record");

        assert_eq!(record.first_name, "Someone");
        assert_eq!(record.city, "");
        assert_eq!(record.country, "");
        assert_eq!(record.product_image, "");
    }

    #[test]
    fn test_missing_address_and_title_defaults() {
        let record = node(serde_json::json!({
            "id": "gid://shopify/Order/1003",
            "createdAt": "2026-05-01T12:00:00Z",
            "customer": {"firstName": null, "defaultAddress": null},
            "lineItems": {
                "nodes": [{"title": null, "product": null, "image": null}]
            }
        }))
        .into_notification()
        .expect("record");

        assert_eq!(record.first_name, "Someone");
        assert_eq!(record.product_name, "Product");
        assert_eq!(record.id, "");
        assert_eq!(record.product_id, "");
    }

    #[test]
    fn test_order_without_line_items_is_skipped() {
        let record = node(serde_json::json!({
            "id": "gid://shopify/Order/1004",
            "createdAt": "2026-05-01T12:00:00Z",
            "customer": null,
            "lineItems": {"nodes": []}
        }))
        .into_notification();

        assert!(record.is_none());
    }
}
