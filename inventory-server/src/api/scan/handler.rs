//! Scan API Handlers

use axum::{Json, extract::State};
use shared::models::{ProductActionResponse, ScanInput};

use crate::core::ServerState;
use crate::inventory;
use crate::utils::{ApiJson, AppResult};

/// POST /api/scan
pub async fn scan(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ScanInput>,
) -> AppResult<Json<ProductActionResponse>> {
    let product = inventory::process_scan(&state.db.pool, payload).await?;
    Ok(Json(ProductActionResponse {
        message: "Scan processed successfully".into(),
        product,
    }))
}
