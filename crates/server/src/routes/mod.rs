//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (pings the database)
//!
//! # Admin API (embedded admin UI)
//! GET    /api/notifications         - List a shop's notifications
//! DELETE /api/notifications         - Delete one notification (body: {id})
//! POST   /api/notifications/sync    - Pull recent orders and replace the list
//! GET    /api/settings              - Get settings (seeds defaults if absent)
//! POST   /api/settings              - Merge-save settings
//!
//! # Storefront (public)
//! GET    /clientApi/widget          - Widget payload for the script tag
//!
//! # Webhooks (Shopify)
//! POST   /webhooks/app/installed    - Log and acknowledge
//! POST   /webhooks/app/uninstalled  - Log and acknowledge
//! ```
//!
//! Admin API responses use the `{success, data?, message?, error?}` envelope;
//! the widget endpoint returns its payload bare, as the script tag consumes it.

pub mod notifications;
pub mod settings;
pub mod webhooks;
pub mod widget;

use axum::{
    Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notifications",
            get(notifications::list).delete(notifications::delete),
        )
        .route("/api/notifications/sync", post(notifications::sync))
        .route("/api/settings", get(settings::get).post(settings::save))
        .route("/clientApi/widget", get(widget::payload))
        .route("/webhooks/app/installed", post(webhooks::app_installed))
        .route("/webhooks/app/uninstalled", post(webhooks::app_uninstalled))
}

/// The standard admin API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying data.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A successful response carrying data and a human-readable message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// A bare success acknowledgement.
    pub const fn ack() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }
}

/// Query parameters identifying the requesting shop.
///
/// The embed transport normally resolves these from the verified session;
/// here they travel as query parameters.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    /// Shop domain (e.g., your-store.myshopify.com).
    pub shop: Option<String>,
    /// Shop ID, required by the settings endpoints.
    #[serde(rename = "shopId")]
    pub shop_id: Option<String>,
}

impl ShopQuery {
    /// The shop domain, or a 400-class error when missing.
    pub fn require_shop(&self) -> Result<&str, ApiError> {
        self.shop.as_deref().ok_or(ApiError::MissingShopDomain)
    }

    /// The shop ID, or a 400-class error when missing.
    pub fn require_shop_id(&self) -> Result<&str, ApiError> {
        self.shop_id.as_deref().ok_or(ApiError::MissingShopId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_skips_absent_fields() {
        let response = ApiResponse::ack();
        let json = serde_json::to_value(&response).expect("serialize");
        let obj = json.as_object().expect("object");

        assert_eq!(obj.len(), 1);
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_envelope_with_message() {
        let response = ApiResponse::ok_with_message(vec![1, 2, 3], "Synced 3 orders successfully");
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], "Synced 3 orders successfully");
    }

    #[test]
    fn test_shop_query_requires_shop() {
        let query = ShopQuery {
            shop: None,
            shop_id: None,
        };
        assert!(query.require_shop().is_err());

        let query = ShopQuery {
            shop: Some("s1.myshopify.com".to_string()),
            shop_id: None,
        };
        assert_eq!(query.require_shop().expect("shop"), "s1.myshopify.com");
        assert!(query.require_shop_id().is_err());
    }
}
