//! Category handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::categories;
use crate::models::category::CategoryCreate;
use crate::models::item::ErrorResponse;
use crate::{store, AppState};

/// POST /categories/
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<Json<categories::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(item_id = payload.item_id, name = %payload.name, "Creating category");
    let category = store::category::create_category(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Category create failed");
            store_error(e)
        })?;
    Ok(Json(category))
}

/// GET /categories/{cat_id}/
pub async fn get_category(
    State(state): State<AppState>,
    Path(cat_id): Path<i32>,
) -> Result<Json<categories::Model>, (StatusCode, Json<ErrorResponse>)> {
    let category = store::category::get_category(&state.db, cat_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch category");
            store_error(e)
        })?;
    match category {
        Some(category) => Ok(Json(category)),
        None => {
            warn!(cat_id, "Category not found");
            Err(not_found("Category"))
        }
    }
}

/// GET /items/{item_id}/categories/
pub async fn get_categories_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Json<Vec<categories::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let categories = store::category::get_categories_by_item(&state.db, item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch categories by item");
            store_error(e)
        })?;
    match categories {
        Some(categories) => Ok(Json(categories)),
        None => {
            warn!(item_id, "Item not found");
            Err(not_found("Item"))
        }
    }
}

/// DELETE /categories/{cat_id}/
pub async fn delete_category(
    State(state): State<AppState>,
    Path(cat_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(cat_id, "Deleting category");
    store::category::delete_category(&state.db, cat_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Category delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
