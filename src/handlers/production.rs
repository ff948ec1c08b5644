//! Production recipe handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::productions;
use crate::models::item::ErrorResponse;
use crate::models::production::{ProductionCreate, ProductionFull};
use crate::{store, AppState};

/// POST /productions/
pub async fn create_production(
    State(state): State<AppState>,
    Json(payload): Json<ProductionCreate>,
) -> Result<Json<productions::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.item_id, "Creating production recipe");
    let production = store::production::create_production(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Production create failed");
            store_error(e)
        })?;
    Ok(Json(production))
}

/// GET /productions/{production_id}/
pub async fn get_production(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
) -> Result<Json<productions::Model>, (StatusCode, Json<ErrorResponse>)> {
    let production = store::production::get_production(&state.db, production_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch production");
            store_error(e)
        })?;
    match production {
        Some(production) => Ok(Json(production)),
        None => {
            warn!(production_id, "Production not found");
            Err(not_found("Production"))
        }
    }
}

/// GET /productions/{production_id}/full/
///
/// The recipe with material and skill requirements eager-loaded.
pub async fn get_production_full(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
) -> Result<Json<ProductionFull>, (StatusCode, Json<ErrorResponse>)> {
    let production = store::production::get_production_full(&state.db, production_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch production with requirements");
            store_error(e)
        })?;
    match production {
        Some(production) => Ok(Json(production)),
        None => {
            warn!(production_id, "Production not found");
            Err(not_found("Production"))
        }
    }
}

/// GET /items/{item_id}/productions/
pub async fn get_productions_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Vec<productions::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::production::get_productions_by_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch productions by item");
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

/// DELETE /productions/{production_id}/
pub async fn delete_production(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(production_id, "Deleting production");
    store::production::delete_production(&state.db, production_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Production delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
