//! Settings API handlers.

use axum::{
    Json,
    extract::{Query, State},
};

use sales_pop_core::{SettingsPatch, ShopId, ShopSettings};

use crate::error::ApiError;
use crate::state::AppState;

use super::{ApiResponse, ShopQuery};

/// Get a shop's settings, seeding the defaults on first access.
///
/// # Errors
///
/// Returns 400 when the shop domain or shop ID is missing, 500 when the
/// store fails.
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Json<ApiResponse<ShopSettings>>, ApiError> {
    let shop = query.require_shop()?;
    let shop_id = ShopId::new(query.require_shop_id()?);

    let settings = state.settings().get_or_seed(&shop_id, shop).await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// Merge-save a full or partial settings document. Fields absent from the
/// body are preserved.
///
/// # Errors
///
/// Returns 400 when the shop domain or shop ID is missing, 500 when the
/// store fails.
pub async fn save(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<ApiResponse<ShopSettings>>, ApiError> {
    let shop = query.require_shop()?;
    let shop_id = ShopId::new(query.require_shop_id()?);

    let settings = state.settings().save(&shop_id, shop, &patch).await?;
    Ok(Json(ApiResponse::ok_with_message(
        settings,
        "Settings saved successfully",
    )))
}
