//! Latest price handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::latest_prices;
use crate::models::item::{ErrorResponse, ListQuery};
use crate::models::latest::LatestCreate;
use crate::{store, AppState};

/// POST /latest/
pub async fn create_latest(
    State(state): State<AppState>,
    Json(payload): Json<LatestCreate>,
) -> Result<Json<latest_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.item_id, "Creating latest price");
    let latest = store::latest::create_latest(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Latest price create failed");
            store_error(e)
        })?;
    Ok(Json(latest))
}

/// GET /latest/
///
/// The most recent observation per distinct item, newest first.
pub async fn get_latest_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<latest_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::latest::get_latest_all(&state.db, query.limit())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list latest prices");
            store_error(e)
        })?;
    Ok(Json(rows))
}

/// GET /latest/{latest_id}/
pub async fn get_latest(
    State(state): State<AppState>,
    Path(latest_id): Path<i32>,
) -> Result<Json<latest_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    let latest = store::latest::get_latest(&state.db, latest_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch latest price");
            store_error(e)
        })?;
    match latest {
        Some(latest) => Ok(Json(latest)),
        None => {
            warn!(latest_id, "Latest price not found");
            Err(not_found("Latest price"))
        }
    }
}

/// GET /items/{item_id}/latest/
pub async fn get_latest_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Vec<latest_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::latest::get_latest_by_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch latest prices by item");
            store_error(e)
        })?;
    match rows {
        Some(rows) => Ok(Json(rows)),
        None => {
            warn!(item_id, "Item not found");
            Err(not_found("Item"))
        }
    }
}

/// DELETE /latest/{latest_id}/
pub async fn delete_latest(
    State(state): State<AppState>,
    Path(latest_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(latest_id, "Deleting latest price");
    store::latest::delete_latest(&state.db, latest_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Latest price delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
