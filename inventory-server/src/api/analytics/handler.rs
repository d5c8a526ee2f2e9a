//! Analytics API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analytics::{self, DEFAULT_FORECAST_DAYS, ProductForecast, ReorderSuggestion};
use crate::api::ListResponse;
use crate::core::ServerState;
use crate::utils::AppResult;

/// `{success, data, generated_at}`
#[derive(Debug, Serialize)]
pub struct ForecastResponse<T> {
    pub success: bool,
    pub data: T,
    /// RFC 3339
    pub generated_at: String,
}

impl<T> ForecastResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub days: Option<u32>,
}

/// GET /api/analytics/forecast
pub async fn forecast_all(
    State(state): State<ServerState>,
) -> AppResult<Json<ForecastResponse<Vec<ProductForecast>>>> {
    let forecasts = analytics::forecast_all(&state.db.pool, DEFAULT_FORECAST_DAYS).await?;
    Ok(Json(ForecastResponse::new(forecasts)))
}

/// GET /api/analytics/forecast/{id}?days=N
pub async fn forecast_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastResponse<ProductForecast>>> {
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecast = analytics::forecast_one(&state.db.pool, id, days).await?;
    Ok(Json(ForecastResponse::new(forecast)))
}

/// GET /api/analytics/reorder-suggestions
pub async fn reorder_suggestions(
    State(state): State<ServerState>,
) -> AppResult<Json<ListResponse<ReorderSuggestion>>> {
    let suggestions = analytics::reorder_suggestions(&state.db.pool).await?;
    Ok(Json(ListResponse::new(suggestions)))
}
