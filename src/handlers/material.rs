//! Material handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::materials;
use crate::models::item::ErrorResponse;
use crate::models::material::MaterialCreate;
use crate::{store, AppState};

/// POST /materials/
pub async fn create_material(
    State(state): State<AppState>,
    Json(payload): Json<MaterialCreate>,
) -> Result<Json<materials::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(production_id = payload.production_id, name = %payload.name, "Creating material");
    let material = store::material::create_material(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Material create failed");
            store_error(e)
        })?;
    Ok(Json(material))
}

/// GET /materials/{material_id}/
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
) -> Result<Json<materials::Model>, (StatusCode, Json<ErrorResponse>)> {
    let material = store::material::get_material(&state.db, material_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch material");
            store_error(e)
        })?;
    match material {
        Some(material) => Ok(Json(material)),
        None => {
            warn!(material_id, "Material not found");
            Err(not_found("Material"))
        }
    }
}

/// GET /productions/{production_id}/materials/
pub async fn get_materials_by_production(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
) -> Result<Json<Vec<materials::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::material::get_materials_by_production(&state.db, production_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch materials by production");
            store_error(e)
        })?;
    match rows {
        Some(rows) => Ok(Json(rows)),
        None => {
            warn!(production_id, "Production not found");
            Err(not_found("Production"))
        }
    }
}

/// DELETE /materials/{material_id}/
pub async fn delete_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(material_id, "Deleting material");
    store::material::delete_material(&state.db, material_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Material delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
