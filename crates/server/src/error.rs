//! Unified error handling for the API surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::SyncError;
use crate::shopify::ShopifyError;
use crate::store::StoreError;

/// Application-level error type for API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request did not carry a shop domain.
    #[error("Missing shop domain")]
    MissingShopDomain,

    /// Request did not carry a shop ID.
    #[error("Missing shop ID")]
    MissingShopId,

    /// Delete request did not carry a notification ID.
    #[error("Missing notification ID")]
    MissingNotificationId,

    /// The shop has no credential record.
    #[error("Shop not found: {0}")]
    ShopNotFound(String),

    /// Webhook body signature did not verify.
    #[error("Invalid webhook signature")]
    InvalidWebhookSignature,

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),
}

impl From<SyncError> for ApiError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::ShopNotFound(shop) => Self::ShopNotFound(shop),
            SyncError::Shopify(e) => Self::Shopify(e),
            SyncError::Store(e) => Self::Store(e),
        }
    }
}

/// Error body in the standard `{success, error}` envelope.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Store(_) | Self::Shopify(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API request error"
            );
        }

        let status = match &self {
            Self::MissingShopDomain | Self::MissingShopId | Self::MissingNotificationId => {
                StatusCode::BAD_REQUEST
            }
            Self::ShopNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidWebhookSignature => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) => "Internal server error".to_string(),
            Self::Shopify(_) => "External service error".to_string(),
            _ => self.to_string(),
        };

        (
            status,
            Json(ErrorEnvelope {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::MissingShopDomain;
        assert_eq!(err.to_string(), "Missing shop domain");

        let err = ApiError::MissingNotificationId;
        assert_eq!(err.to_string(), "Missing notification ID");
    }

    #[test]
    fn test_api_error_status_codes() {
        fn get_status(err: ApiError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(ApiError::MissingShopDomain),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::MissingNotificationId),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::ShopNotFound("s1.myshopify.com".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::InvalidWebhookSignature),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_sync_error_conversion() {
        let err: ApiError = SyncError::ShopNotFound("s1.myshopify.com".to_string()).into();
        assert!(matches!(err, ApiError::ShopNotFound(_)));
    }
}
