//! Product API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{
    DEFAULT_REORDER_QUANTITY, Product, ProductActionResponse, ProductCreate, ProductUpdate,
    ReorderInput,
};

use crate::core::ServerState;
use crate::db::repository;
use crate::inventory;
use crate::utils::extract::parse_optional_json;
use crate::utils::{ApiJson, AppError, AppResult, ErrorCode};

/// GET /api/products - most recently scanned first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = repository::product::find_all(&state.db.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = repository::product::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
        })?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = inventory::create_product(&state.db.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = inventory::update_product(&state.db.pool, id, payload).await?;
    Ok(Json(product))
}

/// POST /api/products/{id}/reorder - body is optional
pub async fn reorder(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> AppResult<Json<ProductActionResponse>> {
    let input: ReorderInput = parse_optional_json(&body)?;
    let quantity = input.quantity.unwrap_or(DEFAULT_REORDER_QUANTITY);
    let product = inventory::restock_product(&state.db.pool, id, Some(quantity)).await?;
    Ok(Json(ProductActionResponse {
        message: format!("Reordered {quantity} units of {}", product.name),
        product,
    }))
}
