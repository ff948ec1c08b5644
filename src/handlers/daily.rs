//! Daily price handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::daily_prices;
use crate::models::daily::DailyCreate;
use crate::models::item::{ErrorResponse, ListQuery};
use crate::{store, AppState};

/// POST /daily/
pub async fn create_daily(
    State(state): State<AppState>,
    Json(payload): Json<DailyCreate>,
) -> Result<Json<daily_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.item_id, "Creating daily price");
    let daily = store::daily::create_daily(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Daily price create failed");
            store_error(e)
        })?;
    Ok(Json(daily))
}

/// GET /daily/
pub async fn get_daily_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<daily_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::daily::get_daily_all(&state.db, query.limit())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list daily prices");
            store_error(e)
        })?;
    Ok(Json(rows))
}

/// GET /daily/{daily_id}/
pub async fn get_daily(
    State(state): State<AppState>,
    Path(daily_id): Path<i32>,
) -> Result<Json<daily_prices::Model>, (StatusCode, Json<ErrorResponse>)> {
    let daily = store::daily::get_daily(&state.db, daily_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch daily price");
            store_error(e)
        })?;
    match daily {
        Some(daily) => Ok(Json(daily)),
        None => {
            warn!(daily_id, "Daily price not found");
            Err(not_found("Daily price"))
        }
    }
}

/// GET /items/{item_id}/daily/
pub async fn get_daily_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Vec<daily_prices::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::daily::get_daily_by_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch daily prices by item");
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

/// DELETE /daily/{daily_id}/
pub async fn delete_daily(
    State(state): State<AppState>,
    Path(daily_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(daily_id, "Deleting daily price");
    store::daily::delete_daily(&state.db, daily_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Daily price delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
