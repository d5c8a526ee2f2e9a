//! Material API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Material, MaterialCreate, MaterialUpdate};

use crate::core::ServerState;
use crate::db::repository;
use crate::inventory;
use crate::utils::{ApiJson, AppError, AppResult, ErrorCode};

/// GET /api/materials
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Material>>> {
    let materials = repository::material::find_all(&state.db.pool).await?;
    Ok(Json(materials))
}

/// GET /api/materials/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Material>> {
    let material = repository::material::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::MaterialNotFound, format!("Material {id} not found"))
        })?;
    Ok(Json(material))
}

/// POST /api/materials
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<MaterialCreate>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let material = inventory::create_material(&state.db.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// PUT /api/materials/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<MaterialUpdate>,
) -> AppResult<Json<Material>> {
    let material = inventory::update_material(&state.db.pool, id, payload).await?;
    Ok(Json(material))
}
