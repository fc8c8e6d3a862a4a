//! Public widget endpoint for the storefront script tag.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::WidgetPayload;
use crate::state::AppState;

/// Query parameters for the widget endpoint.
#[derive(Debug, Deserialize)]
pub struct WidgetQuery {
    /// Storefront domain, injected by the script tag from `window.Shopify.shop`.
    #[serde(rename = "shopifyDomain")]
    pub shopify_domain: Option<String>,
}

/// Return the widget payload for a storefront domain.
///
/// The response is the bare payload, not the admin envelope - the script
/// tag reads `enabled` directly and no-ops when it is false. Unknown
/// domains are answered with `{enabled: false}`, never an error, so a
/// misconfigured script tag stays silent on the storefront.
///
/// # Errors
///
/// Returns 400 when the domain parameter is missing, 500 when the store
/// fails.
pub async fn payload(
    State(state): State<AppState>,
    Query(query): Query<WidgetQuery>,
) -> Result<Json<WidgetPayload>, ApiError> {
    let shop_domain = query
        .shopify_domain
        .as_deref()
        .ok_or(ApiError::MissingShopDomain)?;

    let payload = state.widget().payload(shop_domain).await?;
    Ok(Json(payload))
}
