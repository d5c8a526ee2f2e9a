//! Material Repository

use super::{RepoError, RepoResult};
use shared::models::{Material, MaterialCreate, MaterialUpdate};
use sqlx::{Any, Executor};

pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<Material>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, Material>(
        "SELECT id, name, sku, quantity, unit, cost_per_unit, min_stock_level FROM materials ORDER BY id",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> RepoResult<Option<Material>>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Material>(
        "SELECT id, name, sku, quantity, unit, cost_per_unit, min_stock_level FROM materials WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

pub async fn find_by_sku<'e, E>(executor: E, sku: &str) -> RepoResult<Option<Material>>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Material>(
        "SELECT id, name, sku, quantity, unit, cost_per_unit, min_stock_level FROM materials WHERE sku = $1",
    )
    .bind(sku)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

/// Insert a material; `min_stock_level` must already be resolved
pub async fn create<'e, E>(
    executor: E,
    data: &MaterialCreate,
    min_stock_level: i64,
) -> RepoResult<Material>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Material>(
        "INSERT INTO materials (name, sku, quantity, unit, cost_per_unit, min_stock_level) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id, name, sku, quantity, unit, cost_per_unit, min_stock_level",
    )
    .bind(&data.name)
    .bind(&data.sku)
    .bind(data.quantity)
    .bind(&data.unit)
    .bind(data.cost_per_unit)
    .bind(min_stock_level)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Apply a partial update; absent fields keep their stored value
pub async fn update<'e, E>(executor: E, id: i64, data: &MaterialUpdate) -> RepoResult<Material>
where
    E: Executor<'e, Database = Any>,
{
    sqlx::query_as::<_, Material>(
        "UPDATE materials SET name = COALESCE($1, name), sku = COALESCE($2, sku), quantity = COALESCE($3, quantity), unit = COALESCE($4, unit), cost_per_unit = COALESCE($5, cost_per_unit), min_stock_level = COALESCE($6, min_stock_level) WHERE id = $7 RETURNING id, name, sku, quantity, unit, cost_per_unit, min_stock_level",
    )
    .bind(data.name.as_deref())
    .bind(data.sku.as_deref())
    .bind(data.quantity)
    .bind(data.unit.as_deref())
    .bind(data.cost_per_unit)
    .bind(data.min_stock_level)
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Material {id} not found")))
}
