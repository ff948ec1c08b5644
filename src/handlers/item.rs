//! Item handlers
//!
//! CRUD over the aggregate root plus the eager-loaded /items/full/ listing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::items;
use crate::models::item::{ErrorResponse, ItemCreate, ItemFull, ItemUpdate, ListQuery};
use crate::{store, AppState};

/// GET /items/
pub async fn get_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<items::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let items = store::item::get_items(&state.db, query.limit())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list items");
            store_error(e)
        })?;
    Ok(Json(items))
}

/// GET /items/full/
///
/// Every item with categories, prices and recipes eager-loaded.
pub async fn get_items_full(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemFull>>, (StatusCode, Json<ErrorResponse>)> {
    let items = store::item::get_items_full(&state.db).await.map_err(|e| {
        error!(error = %e, "Failed to list items with relations");
        store_error(e)
    })?;
    Ok(Json(items))
}

/// POST /items/
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemCreate>,
) -> Result<Json<items::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.id, name = %payload.name, "Creating item");
    let item = store::item::create_item(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Item create failed");
            store_error(e)
        })?;
    Ok(Json(item))
}

/// GET /items/{item_id}/
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<items::Model>, (StatusCode, Json<ErrorResponse>)> {
    let item = store::item::get_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch item");
            store_error(e)
        })?;
    match item {
        Some(item) => Ok(Json(item)),
        None => {
            warn!(item_id, "Item not found");
            Err(not_found("Item"))
        }
    }
}

/// PUT /items/
///
/// Full-row update keyed on the body's id. Updating a missing id is a
/// silent no-op, mirroring the row-level UPDATE it issues.
pub async fn update_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemUpdate>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.id, "Updating item");
    store::item::update_item(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Item update failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/{item_id}/
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id, "Deleting item");
    store::item::delete_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Item delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
