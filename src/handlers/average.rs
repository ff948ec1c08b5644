//! Average price handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::average_prices;
use crate::models::average::AverageCreate;
use crate::models::item::{ErrorResponse, ListQuery};
use crate::{store, AppState};

/// POST /average/
pub async fn create_average(
    State(state): State<AppState>,
    Json(payload): Json<AverageCreate>,
) -> Result<Json<average_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.item_id, "Creating average price");
    let average = store::average::create_average(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Average price create failed");
            store_error(e)
        })?;
    Ok(Json(average))
}

/// GET /average/
pub async fn get_average_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<average_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::average::get_average_all(&state.db, query.limit())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list average prices");
            store_error(e)
        })?;
    Ok(Json(rows))
}

/// GET /average/{average_id}/
pub async fn get_average(
    State(state): State<AppState>,
    Path(average_id): Path<i32>,
) -> Result<Json<average_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    let average = store::average::get_average(&state.db, average_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch average price");
            store_error(e)
        })?;
    match average {
        Some(average) => Ok(Json(average)),
        None => {
            warn!(average_id, "Average price not found");
            Err(not_found("Average price"))
        }
    }
}

/// GET /items/{item_id}/average/
pub async fn get_average_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Vec<average_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::average::get_average_by_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch average prices by item");
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

/// DELETE /average/{average_id}/
pub async fn delete_average(
    State(state): State<AppState>,
    Path(average_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(average_id, "Deleting average price");
    store::average::delete_average(&state.db, average_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Average price delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
