//! Shopify webhook handlers.
//!
//! The app subscribes to `app/installed` and `app/uninstalled`. Both are
//! log-and-acknowledge: no core logic depends on them. Every delivery is
//! verified against the `X-Shopify-Hmac-Sha256` body signature before it
//! is trusted.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use secrecy::ExposeSecret;
use sha2::Sha256;

use crate::error::ApiError;
use crate::state::AppState;

use super::ApiResponse;

type HmacSha256 = Hmac<Sha256>;

const HMAC_HEADER: &str = "X-Shopify-Hmac-Sha256";
const SHOP_DOMAIN_HEADER: &str = "X-Shopify-Shop-Domain";

/// Verify the webhook body signature.
///
/// Shopify signs the raw request body with the app secret and sends the
/// base64-encoded digest in `X-Shopify-Hmac-Sha256`.
fn verify_webhook_hmac(secret: &str, body: &[u8], provided: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    let computed = BASE64.encode(mac.finalize().into_bytes());
    computed == provided
}

fn authenticate(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<String, ApiError> {
    let provided = headers
        .get(HMAC_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidWebhookSignature)?;

    let secret = state.config().shopify.api_secret.expose_secret();
    if !verify_webhook_hmac(secret, body, provided) {
        return Err(ApiError::InvalidWebhookSignature);
    }

    Ok(headers
        .get(SHOP_DOMAIN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<unknown>")
        .to_string())
}

/// Handle the `app/installed` webhook.
///
/// # Errors
///
/// Returns 401 when the body signature does not verify.
pub async fn app_installed(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let shop_domain = authenticate(&state, &headers, &body)?;
    tracing::info!(shop = %shop_domain, "App installed webhook received");
    Ok(Json(ApiResponse::ack()))
}

/// Handle the `app/uninstalled` webhook.
///
/// # Errors
///
/// Returns 401 when the body signature does not verify.
pub async fn app_uninstalled(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let shop_domain = authenticate(&state, &headers, &body)?;
    tracing::info!(shop = %shop_domain, "App uninstalled webhook received");
    Ok(Json(ApiResponse::ack()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_webhook_hmac_accepts_signed_body() {
        let secret = "shpss_test_secret";
        let body = br#"{"id":123,"name":"s1.myshopify.com"}"#;

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("key");
        mac.update(body);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(verify_webhook_hmac(secret, body, &signature));
    }

    #[test]
    fn test_verify_webhook_hmac_rejects_tampered_body() {
        let secret = "shpss_test_secret";
        let body = br#"{"id":123}"#;

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("key");
        mac.update(body);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(!verify_webhook_hmac(secret, br#"{"id":124}"#, &signature));
    }

    #[test]
    fn test_verify_webhook_hmac_rejects_wrong_secret() {
        let body = br#"{"id":123}"#;

        let mut mac = HmacSha256::new_from_slice(b"shpss_test_secret").expect("key");
        mac.update(body);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(!verify_webhook_hmac("different_secret", body, &signature));
    }
}
