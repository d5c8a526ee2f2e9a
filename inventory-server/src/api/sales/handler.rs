//! Sale API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Sale, SaleCreate};

use crate::core::ServerState;
use crate::db::repository;
use crate::inventory;
use crate::utils::{ApiJson, AppResult};

/// GET /api/sales - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Sale>>> {
    let sales = repository::sale::find_all(&state.db.pool).await?;
    Ok(Json(sales))
}

/// POST /api/sales
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<SaleCreate>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let sale = inventory::record_sale(&state.db.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}
