//! Sale recording

use shared::models::{EntityType, LogAction, Sale, SaleCreate};
use sqlx::AnyPool;

use crate::db::repository::{self, inventory_log::NewLog};
use crate::utils::validation::validate_positive;
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_sale(input: &SaleCreate) -> AppResult<()> {
    validate_positive(input.quantity, "quantity", ErrorCode::SaleInvalidQuantity)?;
    if !input.total_price.is_finite() || input.total_price < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::SaleInvalidTotal,
            "totalPrice must be a non-negative number",
        )
        .with_detail("field", "totalPrice"));
    }
    Ok(())
}

/// Record a sale, decrement stock and append a SALE entry, all or nothing
///
/// Stock may go negative: an oversold sale is still recorded.
pub async fn record_sale(pool: &AnyPool, input: SaleCreate) -> AppResult<Sale> {
    validate_sale(&input)?;

    let mut tx = repository::begin(pool).await?;
    // Dropping the transaction on the early return rolls it back
    let product = repository::product::find_by_id(&mut *tx, input.product_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product {} not found", input.product_id),
            )
        })?;

    let sale = repository::sale::create(&mut *tx, &input, shared::util::now_millis()).await?;
    let product = repository::product::adjust_quantity(&mut *tx, product.id, -input.quantity).await?;

    let description = format!("Sale #{}", sale.id);
    repository::inventory_log::append(
        &mut *tx,
        NewLog {
            action: LogAction::Sale,
            entity_type: EntityType::Product,
            entity_id: product.id,
            change_amount: -(input.quantity as f64),
            description: Some(&description),
        },
    )
    .await?;
    repository::commit(tx).await?;

    if product.quantity < 0 {
        tracing::warn!(product_id = product.id, quantity = product.quantity, "Stock went negative after sale");
    }
    tracing::info!(sale_id = sale.id, product_id = product.id, quantity = sale.quantity, "Sale recorded");
    Ok(sale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_db;
    use crate::inventory::create_product;
    use crate::utils::validation::MAX_QUANTITY;
    use shared::models::ProductCreate;

    async fn shelf(pool: &AnyPool, quantity: i64) -> i64 {
        let input = ProductCreate {
            name: "Wall Shelf".into(),
            sku: "PROD-003".into(),
            description: None,
            quantity,
            price: 45.0,
            detected_color: None,
            detected_texture: None,
            detected_dimensions: None,
        };
        create_product(pool, input).await.unwrap().id
    }

    fn sale(product_id: i64, quantity: i64, total_price: f64) -> SaleCreate {
        SaleCreate {
            product_id,
            quantity,
            total_price,
        }
    }

    #[tokio::test]
    async fn test_sale_decrements_stock_and_logs() {
        let db = test_db().await;
        let id = shelf(&db.pool, 25).await;

        let recorded = record_sale(&db.pool, sale(id, 3, 135.0)).await.unwrap();
        assert_eq!(recorded.quantity, 3);
        assert_eq!(recorded.total_price, 135.0);

        let product = repository::product::find_by_id(&db.pool, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 22);

        let logs = repository::inventory_log::find_by_entity(&db.pool, EntityType::Product, id)
            .await
            .unwrap();
        assert_eq!(logs[0].action, LogAction::Sale);
        assert_eq!(logs[0].change_amount, -3.0);
        assert_eq!(logs[0].description, Some(format!("Sale #{}", recorded.id)));
        // CREATE + exactly one SALE
        assert_eq!(logs.len(), 2);
        assert_eq!(logs.iter().filter(|l| l.action == LogAction::Sale).count(), 1);
        assert_eq!(repository::sale::find_all(&db.pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_oversold_sale_goes_negative() {
        let db = test_db().await;
        let id = shelf(&db.pool, 2).await;

        record_sale(&db.pool, sale(id, 5, 10.0)).await.unwrap();
        let product = repository::product::find_by_id(&db.pool, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, -3);
    }

    #[tokio::test]
    async fn test_sale_for_missing_product_writes_nothing() {
        let db = test_db().await;
        let err = record_sale(&db.pool, sale(404, 1, 1.0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);

        assert!(repository::sale::find_all(&db.pool).await.unwrap().is_empty());
        assert!(repository::inventory_log::find_all(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sale_validation() {
        let db = test_db().await;
        let id = shelf(&db.pool, 10).await;

        let err = record_sale(&db.pool, sale(id, 0, 1.0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SaleInvalidQuantity);

        let err = record_sale(&db.pool, sale(id, 1, -1.0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SaleInvalidTotal);

        let err = record_sale(&db.pool, sale(id, 1, f64::NAN)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SaleInvalidTotal);

        assert!(repository::sale::find_all(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_huge_sale_rejected_and_forecast_survives_large_sales() {
        let db = test_db().await;
        let id = shelf(&db.pool, 0).await;

        let err = record_sale(&db.pool, sale(id, i64::MAX, 1.0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(repository::sale::find_all(&db.pool).await.unwrap().is_empty());

        record_sale(&db.pool, sale(id, MAX_QUANTITY, 1.0)).await.unwrap();
        let forecasts = crate::analytics::forecast_all(&db.pool, 7).await.unwrap();
        assert_eq!(forecasts[0].current_stock, -MAX_QUANTITY);
        assert!(forecasts[0].predictions.iter().all(|p| p.predicted_stock == 0));
        assert!(forecasts[0].needs_reorder);
    }
}
