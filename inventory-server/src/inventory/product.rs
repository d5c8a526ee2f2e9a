//! Product creation, edits, restocks and scans

use shared::models::{
    DEFAULT_REORDER_QUANTITY, EntityType, LogAction, Product, ProductCreate, ProductUpdate,
    ScanInput,
};
use sqlx::AnyPool;

use super::{ensure_sku_available, map_sku_conflict};
use crate::db::repository::{self, inventory_log::NewLog};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_non_negative,
    validate_optional_required_text, validate_optional_text, validate_positive,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_detection(
    color: &Option<String>,
    texture: &Option<String>,
    dimensions: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(color, "detectedColor", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(texture, "detectedTexture", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(dimensions, "detectedDimensions", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

fn validate_price(price: f64) -> AppResult<()> {
    validate_amount(price, "price")
        .map_err(|e| AppError::with_message(ErrorCode::ProductInvalidPrice, e.message))
}

fn validate_create(input: &ProductCreate) -> AppResult<()> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.sku, "sku", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&input.description, "description", MAX_NOTE_LEN)?;
    validate_non_negative(input.quantity, "quantity")?;
    validate_price(input.price)?;
    validate_detection(
        &input.detected_color,
        &input.detected_texture,
        &input.detected_dimensions,
    )
}

fn validate_update(patch: &ProductUpdate) -> AppResult<()> {
    validate_optional_required_text(&patch.name, "name", MAX_NAME_LEN)?;
    validate_optional_required_text(&patch.sku, "sku", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&patch.description, "description", MAX_NOTE_LEN)?;
    if let Some(quantity) = patch.quantity {
        validate_non_negative(quantity, "quantity")?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    validate_detection(
        &patch.detected_color,
        &patch.detected_texture,
        &patch.detected_dimensions,
    )
}

fn product_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
}

/// Insert a product and its CREATE log entry
pub async fn create_product(pool: &AnyPool, mut input: ProductCreate) -> AppResult<Product> {
    validate_create(&input)?;
    input.name = input.name.trim().to_string();
    input.sku = input.sku.trim().to_string();

    let mut tx = repository::begin(pool).await?;
    ensure_sku_available(&mut *tx, &input.sku, None, ErrorCode::ProductSkuExists).await?;

    let product = repository::product::create(&mut *tx, &input)
        .await
        .map_err(|e| map_sku_conflict(e, ErrorCode::ProductSkuExists, &input.sku))?;

    let description = format!("Created product {}", product.name);
    repository::inventory_log::append(
        &mut *tx,
        NewLog {
            action: LogAction::Create,
            entity_type: EntityType::Product,
            entity_id: product.id,
            change_amount: product.quantity as f64,
            description: Some(&description),
        },
    )
    .await?;
    repository::commit(tx).await?;

    tracing::info!(product_id = product.id, sku = %product.sku, quantity = product.quantity, "Product created");
    Ok(product)
}

/// Apply a partial update; a quantity change appends an ADJUSTMENT entry
pub async fn update_product(pool: &AnyPool, id: i64, mut patch: ProductUpdate) -> AppResult<Product> {
    validate_update(&patch)?;
    patch.name = patch.name.map(|n| n.trim().to_string());
    patch.sku = patch.sku.map(|s| s.trim().to_string());
    // Only the scan flow stamps the scan time
    patch.last_scanned_at = None;

    let mut tx = repository::begin(pool).await?;
    let existing = repository::product::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| product_not_found(id))?;

    if let Some(sku) = patch.sku.as_deref()
        && sku != existing.sku
    {
        ensure_sku_available(
            &mut *tx,
            sku,
            Some((EntityType::Product, id)),
            ErrorCode::ProductSkuExists,
        )
        .await?;
    }

    let updated = repository::product::update(&mut *tx, id, &patch)
        .await
        .map_err(|e| {
            map_sku_conflict(e, ErrorCode::ProductSkuExists, patch.sku.as_deref().unwrap_or_default())
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
                entity_type: EntityType::Product,
                entity_id: id,
                change_amount: delta as f64,
                description: Some(&description),
            },
        )
        .await?;
    }
    repository::commit(tx).await?;

    tracing::info!(product_id = id, delta, "Product updated");
    Ok(updated)
}

/// Add stock to a product and append a RESTOCK entry
///
/// `quantity` defaults to [`DEFAULT_REORDER_QUANTITY`] and must be positive.
pub async fn restock_product(pool: &AnyPool, id: i64, quantity: Option<i64>) -> AppResult<Product> {
    let quantity = quantity.unwrap_or(DEFAULT_REORDER_QUANTITY);
    validate_positive(quantity, "quantity", ErrorCode::ProductInvalidReorder)?;

    let mut tx = repository::begin(pool).await?;
    let product = repository::product::adjust_quantity(&mut *tx, id, quantity)
        .await
        .map_err(|e| match e {
            repository::RepoError::NotFound(_) => product_not_found(id),
            other => other.into(),
        })?;

    let description = format!("Reordered {} units of {}", quantity, product.name);
    repository::inventory_log::append(
        &mut *tx,
        NewLog {
            action: LogAction::Restock,
            entity_type: EntityType::Product,
            entity_id: id,
            change_amount: quantity as f64,
            description: Some(&description),
        },
    )
    .await?;
    repository::commit(tx).await?;

    tracing::info!(product_id = id, quantity, new_quantity = product.quantity, "Product restocked");
    Ok(product)
}

/// Record detection attributes for the product carrying `input.sku`
///
/// Stamps `last_scanned_at` and appends a SCAN entry with a zero change.
/// Stock is not touched.
pub async fn process_scan(pool: &AnyPool, input: ScanInput) -> AppResult<Product> {
    validate_required_text(&input.sku, "sku", MAX_SHORT_TEXT_LEN)?;
    validate_detection(
        &input.detected_color,
        &input.detected_texture,
        &input.detected_dimensions,
    )?;
    let sku = input.sku.trim();

    let mut tx = repository::begin(pool).await?;
    let product = repository::product::find_by_sku(&mut *tx, sku)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product with SKU {sku} not found"),
            )
            .with_detail("sku", sku)
        })?;

    let patch = ProductUpdate {
        detected_color: input.detected_color,
        detected_texture: input.detected_texture,
        detected_dimensions: input.detected_dimensions,
        last_scanned_at: Some(shared::util::now_millis()),
        ..Default::default()
    };
    let updated = repository::product::update(&mut *tx, product.id, &patch).await?;

    repository::inventory_log::append(
        &mut *tx,
        NewLog {
            action: LogAction::Scan,
            entity_type: EntityType::Product,
            entity_id: product.id,
            change_amount: 0.0,
            description: Some("Vision Engine Scan"),
        },
    )
    .await?;
    repository::commit(tx).await?;

    tracing::info!(product_id = product.id, sku = %updated.sku, "Scan processed");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_db;
    use crate::inventory::create_material;
    use shared::models::MaterialCreate;

    fn chair() -> ProductCreate {
        ProductCreate {
            name: "Modern Oak Chair".into(),
            sku: "PROD-001".into(),
            description: Some("Minimalist oak chair".into()),
            quantity: 12,
            price: 150.0,
            detected_color: None,
            detected_texture: None,
            detected_dimensions: None,
        }
    }

    async fn product_logs(pool: &AnyPool, id: i64) -> Vec<shared::models::InventoryLog> {
        repository::inventory_log::find_by_entity(pool, EntityType::Product, id)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_logs_initial_quantity() {
        let db = test_db().await;
        let product = create_product(&db.pool, chair()).await.unwrap();
        assert_eq!(product.quantity, 12);
        assert!(product.last_scanned_at.is_none());

        let logs = product_logs(&db.pool, product.id).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, LogAction::Create);
        assert_eq!(logs[0].change_amount, 12.0);
        assert_eq!(logs[0].description.as_deref(), Some("Created product Modern Oak Chair"));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let db = test_db().await;
        let mut input = chair();
        input.price = -1.0;
        let err = create_product(&db.pool, input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);

        // Zero is a valid price
        let mut input = chair();
        input.price = 0.0;
        assert_eq!(create_product(&db.pool, input).await.unwrap().price, 0.0);
    }

    #[tokio::test]
    async fn test_sku_shared_with_material_is_conflict() {
        let db = test_db().await;
        let material = MaterialCreate {
            name: "Oak Wood".into(),
            sku: "SHARED-1".into(),
            quantity: 1,
            unit: "planks".into(),
            cost_per_unit: 1.0,
            min_stock_level: None,
        };
        create_material(&db.pool, material).await.unwrap();

        let mut input = chair();
        input.sku = "SHARED-1".into();
        let err = create_product(&db.pool, input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductSkuExists);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_sku_to_taken_value_is_conflict() {
        let db = test_db().await;
        let first = create_product(&db.pool, chair()).await.unwrap();
        let mut other = chair();
        other.sku = "PROD-002".into();
        create_product(&db.pool, other).await.unwrap();

        let patch = ProductUpdate {
            sku: Some("PROD-002".into()),
            ..Default::default()
        };
        let err = update_product(&db.pool, first.id, patch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductSkuExists);

        // Keeping its own SKU is not a conflict
        let patch = ProductUpdate {
            sku: Some("PROD-001".into()),
            price: Some(175.0),
            ..Default::default()
        };
        let updated = update_product(&db.pool, first.id, patch).await.unwrap();
        assert_eq!(updated.price, 175.0);
    }

    #[tokio::test]
    async fn test_update_quantity_logs_adjustment() {
        let db = test_db().await;
        let product = create_product(&db.pool, chair()).await.unwrap();

        let patch = ProductUpdate {
            quantity: Some(20),
            ..Default::default()
        };
        update_product(&db.pool, product.id, patch).await.unwrap();

        let logs = product_logs(&db.pool, product.id).await;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].action, LogAction::Adjustment);
        assert_eq!(logs[0].change_amount, 8.0);
        assert_eq!(
            logs[0].description.as_deref(),
            Some("Adjusted Modern Oak Chair from 12 to 20")
        );
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let db = test_db().await;
        let err = update_product(&db.pool, 7, ProductUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn test_restock_default_and_explicit_quantity() {
        let db = test_db().await;
        let product = create_product(&db.pool, chair()).await.unwrap();

        let after = restock_product(&db.pool, product.id, None).await.unwrap();
        assert_eq!(after.quantity, 62);

        let after = restock_product(&db.pool, product.id, Some(8)).await.unwrap();
        assert_eq!(after.quantity, 70);

        let logs = product_logs(&db.pool, product.id).await;
        assert_eq!(logs[0].action, LogAction::Restock);
        assert_eq!(logs[0].change_amount, 8.0);
        assert_eq!(
            logs[0].description.as_deref(),
            Some("Reordered 8 units of Modern Oak Chair")
        );
        assert_eq!(logs[1].change_amount, 50.0);
    }

    #[tokio::test]
    async fn test_restock_rejects_non_positive_quantity() {
        let db = test_db().await;
        let product = create_product(&db.pool, chair()).await.unwrap();

        for quantity in [0, -5] {
            let err = restock_product(&db.pool, product.id, Some(quantity))
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ProductInvalidReorder);
        }
        let err = restock_product(&db.pool, 999, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(product_logs(&db.pool, product.id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_scan_updates_detection_and_logs() {
        let db = test_db().await;
        let product = create_product(&db.pool, chair()).await.unwrap();

        let input = ScanInput {
            sku: "PROD-001".into(),
            detected_color: Some("Oak Brown".into()),
            detected_texture: None,
            detected_dimensions: Some("50x50x90".into()),
        };
        let scanned = process_scan(&db.pool, input).await.unwrap();
        assert_eq!(scanned.detected_color.as_deref(), Some("Oak Brown"));
        assert_eq!(scanned.detected_dimensions.as_deref(), Some("50x50x90"));
        assert!(scanned.last_scanned_at.is_some());
        assert_eq!(scanned.quantity, product.quantity);

        let logs = product_logs(&db.pool, product.id).await;
        assert_eq!(logs[0].action, LogAction::Scan);
        assert_eq!(logs[0].change_amount, 0.0);
        assert_eq!(logs[0].description.as_deref(), Some("Vision Engine Scan"));
    }

    #[tokio::test]
    async fn test_scan_unknown_sku() {
        let db = test_db().await;
        let input = ScanInput {
            sku: "NOPE".into(),
            detected_color: None,
            detected_texture: None,
            detected_dimensions: None,
        };
        let err = process_scan(&db.pool, input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product with SKU NOPE not found");
        assert!(repository::inventory_log::find_all(&db.pool).await.unwrap().is_empty());
    }
}
