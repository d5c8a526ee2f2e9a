//! Material creation and updates

use shared::models::{
    DEFAULT_MIN_STOCK_LEVEL, EntityType, LogAction, Material, MaterialCreate, MaterialUpdate,
};
use sqlx::AnyPool;

use super::{ensure_sku_available, map_sku_conflict};
use crate::db::repository::{self, inventory_log::NewLog};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_max_len, validate_non_negative,
    validate_optional_required_text, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_create(input: &MaterialCreate) -> AppResult<()> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.sku, "sku", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(input.quantity, "quantity")?;
    validate_max_len(&input.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_amount(input.cost_per_unit, "costPerUnit")?;
    if let Some(min) = input.min_stock_level {
        validate_non_negative(min, "minStockLevel")?;
    }
    Ok(())
}

fn validate_update(patch: &MaterialUpdate) -> AppResult<()> {
    validate_optional_required_text(&patch.name, "name", MAX_NAME_LEN)?;
    validate_optional_required_text(&patch.sku, "sku", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&patch.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    if let Some(quantity) = patch.quantity {
        validate_non_negative(quantity, "quantity")?;
    }
    if let Some(cost) = patch.cost_per_unit {
        validate_amount(cost, "costPerUnit")?;
    }
    if let Some(min) = patch.min_stock_level {
        validate_non_negative(min, "minStockLevel")?;
    }
    Ok(())
}

/// Insert a material and its CREATE log entry
pub async fn create_material(pool: &AnyPool, mut input: MaterialCreate) -> AppResult<Material> {
    validate_create(&input)?;
    input.name = input.name.trim().to_string();
    input.sku = input.sku.trim().to_string();
    let min_stock_level = input.min_stock_level.unwrap_or(DEFAULT_MIN_STOCK_LEVEL);

    let mut tx = repository::begin(pool).await?;
    ensure_sku_available(&mut *tx, &input.sku, None, ErrorCode::MaterialSkuExists).await?;

    let material = repository::material::create(&mut *tx, &input, min_stock_level)
        .await
        .map_err(|e| map_sku_conflict(e, ErrorCode::MaterialSkuExists, &input.sku))?;

    let description = format!("Created material {}", material.name);
    repository::inventory_log::append(
        &mut *tx,
        NewLog {
            action: LogAction::Create,
            entity_type: EntityType::Material,
            entity_id: material.id,
            change_amount: material.quantity as f64,
            description: Some(&description),
        },
    )
    .await?;
    repository::commit(tx).await?;

    tracing::info!(material_id = material.id, sku = %material.sku, quantity = material.quantity, "Material created");
    Ok(material)
}

/// Apply a partial update; a quantity change appends an ADJUSTMENT entry
pub async fn update_material(pool: &AnyPool, id: i64, mut patch: MaterialUpdate) -> AppResult<Material> {
    validate_update(&patch)?;
    patch.name = patch.name.map(|n| n.trim().to_string());
    patch.sku = patch.sku.map(|s| s.trim().to_string());

    let mut tx = repository::begin(pool).await?;
    let existing = repository::material::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::MaterialNotFound, format!("Material {id} not found"))
        })?;

    if let Some(sku) = patch.sku.as_deref()
        && sku != existing.sku
    {
        ensure_sku_available(
            &mut *tx,
            sku,
            Some((EntityType::Material, id)),
            ErrorCode::MaterialSkuExists,
        )
        .await?;
    }

    let updated = repository::material::update(&mut *tx, id, &patch)
        .await
        .map_err(|e| {
            map_sku_conflict(e, ErrorCode::MaterialSkuExists, patch.sku.as_deref().unwrap_or_default())
        })?;

    let delta = updated.quantity.saturating_sub(existing.quantity);
    if delta != 0 {
        let description = format!(
            "Adjusted {} from {} to {}",
            updated.name, existing.quantity, updated.quantity
        );
        repository::inventory_log::append(
            &mut *tx,
            NewLog {
                action: LogAction::Adjustment,
                entity_type: EntityType::Material,
                entity_id: id,
                change_amount: delta as f64,
                description: Some(&description),
            },
        )
        .await?;
    }
    repository::commit(tx).await?;

    tracing::info!(material_id = id, delta, "Material updated");
    Ok(updated)
}
