//! Notification API handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use sales_pop_core::NotificationRecord;

use crate::error::ApiError;
use crate::state::AppState;

use super::{ApiResponse, ShopQuery};

/// List a shop's notifications, most recent first.
///
/// A shop that has never synced gets `success: true` with an empty list.
///
/// # Errors
///
/// Returns 400 when the shop domain is missing, 500 when the store fails.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationRecord>>>, ApiError> {
    let shop = query.require_shop()?;
    let items = state.notifications().list(shop).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// Pull recent orders from Shopify and replace the shop's notifications.
///
/// # Errors
///
/// Returns 400 when the shop domain is missing, 404 when the shop is not
/// registered, 502 when the upstream fetch fails, 500 when the store fails.
pub async fn sync(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationRecord>>>, ApiError> {
    let shop = query.require_shop()?;
    let records = state.notifications().sync(shop).await?;
    let message = format!("Synced {} orders successfully", records.len());
    Ok(Json(ApiResponse::ok_with_message(records, message)))
}

/// Body of a delete request.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: Option<String>,
}

/// Delete one notification by id. Idempotent - deleting an id that is not
/// stored still acknowledges success.
///
/// # Errors
///
/// Returns 400 when the shop domain or id is missing, 500 when the store
/// fails.
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    Json(body): Json<DeleteRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let shop = query.require_shop()?;
    let id = body.id.as_deref().ok_or(ApiError::MissingNotificationId)?;

    state.notifications().delete(shop, id).await?;
    Ok(Json(ApiResponse::ack()))
}
