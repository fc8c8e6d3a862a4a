//! HTTP client for the recent-orders query.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use sales_pop_core::NotificationRecord;

use super::orders::{OrdersData, RECENT_ORDERS_QUERY};
use super::{GraphQLError, GraphQLErrorLocation, ShopifyError};

/// Client for pulling recent orders from the Shopify Admin GraphQL API.
///
/// Stateless apart from the shared `reqwest` connection pool: the shop
/// domain and access token are per-call, since one server instance serves
/// every installed shop.
#[derive(Clone)]
pub struct SyncClient {
    client: reqwest::Client,
    api_version: String,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl SyncClient {
    /// Create a new sync client for the given API version.
    #[must_use]
    pub fn new(api_version: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_version: api_version.into(),
        }
    }

    /// Fetch the most recent orders for a shop, flattened into notification
    /// records. Order of the result is preserved as returned by the API
    /// (newest first); orders with no line items are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::RateLimited` on 429, `ShopifyError::Unauthorized`
    /// on 401, `ShopifyError::GraphQL` when the response carries errors or no
    /// data, and `ShopifyError::Http` for transport failures.
    #[instrument(skip(self, access_token), fields(shop = %shop_domain))]
    pub async fn recent_orders(
        &self,
        shop_domain: &str,
        access_token: &SecretString,
    ) -> Result<Vec<NotificationRecord>, ShopifyError> {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            shop_domain, self.api_version
        );

        let body = serde_json::json!({ "query": RECENT_ORDERS_QUERY });

        let response = self
            .client
            .post(&endpoint)
            .header("X-Shopify-Access-Token", access_token.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        // Check for rate limiting
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        let graphql_response: GraphQLResponse<OrdersData> = response.json().await?;

        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                })
                .collect();
            return Err(ShopifyError::GraphQL(converted_errors));
        }

        let data = graphql_response.data.ok_or_else(|| {
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })?;

        Ok(data
            .orders
            .edges
            .into_iter()
            .filter_map(|edge| edge.node.into_notification())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope_parses_orders() {
        let json = serde_json::json!({
            "data": {
                "orders": {
                    "edges": [{
                        "node": {
                            "id": "gid://shopify/Order/1001",
                            "createdAt": "2026-05-01T12:00:00Z",
                            "customer": null,
                            "lineItems": {
                                "nodes": [{
                                    "title": "Sneakers",
                                    "product": {"id": "gid://shopify/Product/7"},
                                    "image": null
                                }]
                            }
                        }
                    }]
                }
            }
        });

        let response: GraphQLResponse<OrdersData> =
            serde_json::from_value(json).expect("deserialize");
        let data = response.data.expect("data");
        assert_eq!(data.orders.edges.len(), 1);
        assert!(response.errors.is_none());
    }

    #[test]
    fn test_response_envelope_parses_errors() {
        let json = serde_json::json!({
            "data": null,
            "errors": [{
                "message": "Access denied for orders field",
                "locations": [{"line": 2, "column": 3}],
                "path": ["orders"]
            }]
        });

        let response: GraphQLResponse<OrdersData> =
            serde_json::from_value(json).expect("deserialize");
        assert!(response.data.is_none());

        let errors = response.errors.expect("errors");
        let first = errors.first().expect("one error");
        assert_eq!(first.message, "Access denied for orders field");
        assert_eq!(first.locations.first().expect("location").line, 2);
    }
}
