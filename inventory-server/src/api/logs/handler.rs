//! Inventory Log API Handlers

use axum::{Json, extract::State};
use shared::models::InventoryLog;

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::AppResult;

/// GET /api/logs - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryLog>>> {
    let logs = repository::inventory_log::find_all(&state.db.pool).await?;
    Ok(Json(logs))
}
