//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::{Any, Executor};

pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<Product>>
where
    E: Executor<'e, Database = Any>,
{
    // Most recently scanned first, never-scanned products last
    let rows = sqlx::query_as::<_, Product>(
        "SELECT id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand FROM products ORDER BY last_scanned_at IS NULL, last_scanned_at DESC, id",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> RepoResult<Option<Product>>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Product>(
        "SELECT id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

pub async fn find_by_sku<'e, E>(executor: E, sku: &str) -> RepoResult<Option<Product>>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Product>(
        "SELECT id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand FROM products WHERE sku = $1",
    )
    .bind(sku)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

pub async fn count<'e, E>(executor: E) -> RepoResult<i64>
where
    E: Executor<'e, Database = Any>,
{
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

pub async fn create<'e, E>(executor: E, data: &ProductCreate) -> RepoResult<Product>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand",
    )
    .bind(&data.name)
    .bind(&data.sku)
    .bind(data.description.as_deref())
    .bind(data.quantity)
    .bind(data.price)
    .bind(data.detected_color.as_deref())
    .bind(data.detected_texture.as_deref())
    .bind(data.detected_dimensions.as_deref())
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Apply a partial update; absent fields keep their stored value. Does not log.
pub async fn update<'e, E>(executor: E, id: i64, data: &ProductUpdate) -> RepoResult<Product>
where
    E: Executor<'e, Database = Any>,
{
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = COALESCE($1, name), sku = COALESCE($2, sku), description = COALESCE($3, description), quantity = COALESCE($4, quantity), price = COALESCE($5, price), detected_color = COALESCE($6, detected_color), detected_texture = COALESCE($7, detected_texture), detected_dimensions = COALESCE($8, detected_dimensions), last_scanned_at = COALESCE($9, last_scanned_at) WHERE id = $10 RETURNING id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand",
    )
    .bind(data.name.as_deref())
    .bind(data.sku.as_deref())
    .bind(data.description.as_deref())
    .bind(data.quantity)
    .bind(data.price)
    .bind(data.detected_color.as_deref())
    .bind(data.detected_texture.as_deref())
    .bind(data.detected_dimensions.as_deref())
    .bind(data.last_scanned_at)
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Atomically add `delta` (negative for sales) to the stock, no floor at zero
pub async fn adjust_quantity<'e, E>(executor: E, id: i64, delta: i64) -> RepoResult<Product>
where
    E: Executor<'e, Database = Any>,
{
    sqlx::query_as::<_, Product>(
        "UPDATE products SET quantity = quantity + $1 WHERE id = $2 RETURNING id, name, sku, description, quantity, price, detected_color, detected_texture, detected_dimensions, last_scanned_at, predicted_stock, predicted_demand",
    )
    .bind(delta)
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_db;

    fn product(name: &str, sku: &str, quantity: i64) -> ProductCreate {
        ProductCreate {
            name: name.into(),
            sku: sku.into(),
            description: None,
            quantity,
            price: 10.0,
            detected_color: None,
            detected_texture: None,
            detected_dimensions: None,
        }
    }

    #[tokio::test]
    async fn test_list_orders_recently_scanned_first() {
        let db = test_db().await;
        let a = create(&db.pool, &product("A", "P-A", 1)).await.unwrap();
        let b = create(&db.pool, &product("B", "P-B", 1)).await.unwrap();
        let c = create(&db.pool, &product("C", "P-C", 1)).await.unwrap();

        for (id, at) in [(a.id, 1_000), (c.id, 2_000)] {
            let patch = ProductUpdate {
                last_scanned_at: Some(at),
                ..Default::default()
            };
            update(&db.pool, id, &patch).await.unwrap();
        }

        let ids: Vec<i64> = find_all(&db.pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
    }

    #[tokio::test]
    async fn test_adjust_quantity_allows_negative_stock() {
        let db = test_db().await;
        let p = create(&db.pool, &product("Chair", "PROD-001", 2)).await.unwrap();

        let after = adjust_quantity(&db.pool, p.id, -5).await.unwrap();
        assert_eq!(after.quantity, -3);

        let after = adjust_quantity(&db.pool, p.id, 10).await.unwrap();
        assert_eq!(after.quantity, 7);

        let err = adjust_quantity(&db.pool, 999, 1).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let db = test_db().await;
        let mut input = product("Shelf", "PROD-003", 25);
        input.description = Some("Floating wall shelf".into());
        let p = create(&db.pool, &input).await.unwrap();

        let patch = ProductUpdate {
            detected_color: Some("Oak Brown".into()),
            ..Default::default()
        };
        let updated = update(&db.pool, p.id, &patch).await.unwrap();
        assert_eq!(updated.detected_color.as_deref(), Some("Oak Brown"));
        assert_eq!(updated.description.as_deref(), Some("Floating wall shelf"));
        assert_eq!(updated.quantity, 25);
        assert!(updated.last_scanned_at.is_none());

        assert_eq!(count(&db.pool).await.unwrap(), 1);
        assert!(find_by_sku(&db.pool, "PROD-003").await.unwrap().is_some());
    }
}
