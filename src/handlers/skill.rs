//! Skill handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use super::{not_found, store_error};
use crate::entities::skills;
use crate::models::item::ErrorResponse;
use crate::models::skill::SkillCreate;
use crate::{store, AppState};

/// POST /skills/
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<SkillCreate>,
) -> Result<Json<skills::Model>, (StatusCode, Json<ErrorResponse>)> {
    info!(production_id = payload.production_id, name = %payload.name, "Creating skill");
    let skill = store::skill::create_skill(&state.db, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "Skill create failed");
            store_error(e)
        })?;
    Ok(Json(skill))
}

/// GET /skills/{skill_id}/
pub async fn get_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<i32>,
) -> Result<Json<skills::Model>, (StatusCode, Json<ErrorResponse>)> {
    let skill = store::skill::get_skill(&state.db, skill_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch skill");
            store_error(e)
        })?;
    match skill {
        Some(skill) => Ok(Json(skill)),
        None => {
            warn!(skill_id, "Skill not found");
            Err(not_found("Skill"))
        }
    }
}

/// GET /productions/{production_id}/skills/
pub async fn get_skills_by_production(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
) -> Result<Json<Vec<skills::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = store::skill::get_skills_by_production(&state.db, production_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch skills by production");
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

/// DELETE /skills/{skill_id}/
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!(skill_id, "Deleting skill");
    store::skill::delete_skill(&state.db, skill_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Skill delete failed");
            store_error(e)
        })?;
    Ok(StatusCode::NO_CONTENT)
}
