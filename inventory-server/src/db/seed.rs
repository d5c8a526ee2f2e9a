//! Demo data for an empty database
//!
//! Rows go through the inventory services so every seeded entity gets its
//! CREATE log entry.

use shared::models::{MaterialCreate, ProductCreate};
use sqlx::AnyPool;

use crate::db::repository;
use crate::inventory::{create_material, create_product};
use crate::utils::AppResult;

fn material(name: &str, sku: &str, quantity: i64, unit: &str, cost: f64, min: i64) -> MaterialCreate {
    MaterialCreate {
        name: name.into(),
        sku: sku.into(),
        quantity,
        unit: unit.into(),
        cost_per_unit: cost,
        min_stock_level: Some(min),
    }
}

fn product(name: &str, sku: &str, description: &str, quantity: i64, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.into(),
        sku: sku.into(),
        description: Some(description.into()),
        quantity,
        price,
        detected_color: None,
        detected_texture: None,
        detected_dimensions: None,
    }
}

fn demo_materials() -> Vec<MaterialCreate> {
    vec![
        material("Oak Wood", "MAT-OAK", 50, "planks", 15.50, 10),
        material("Steel Rod", "MAT-STEEL", 100, "rods", 5.25, 20),
        material("Wood Varnish", "MAT-VARNISH", 20, "liters", 12.00, 5),
    ]
}

fn demo_products() -> Vec<ProductCreate> {
    vec![
        product("Modern Oak Chair", "PROD-001", "Minimalist oak chair", 12, 150.0),
        product("Industrial Steel Table", "PROD-002", "Sturdy steel table", 5, 300.0),
        product("Wall Shelf", "PROD-003", "Floating wall shelf", 25, 45.0),
    ]
}

/// Seed three materials and three products when there are no products
///
/// Returns `true` when rows were inserted.
pub async fn seed_if_empty(pool: &AnyPool) -> AppResult<bool> {
    if repository::product::count(pool).await? > 0 {
        tracing::debug!("Products present, skipping seed");
        return Ok(false);
    }

    for input in demo_materials() {
        create_material(pool, input).await?;
    }
    for input in demo_products() {
        create_product(pool, input).await?;
    }

    tracing::info!("Seeded demo materials and products");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_db;
    use shared::models::LogAction;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = test_db().await;

        assert!(seed_if_empty(&db.pool).await.unwrap());
        assert!(!seed_if_empty(&db.pool).await.unwrap());

        let materials = repository::material::find_all(&db.pool).await.unwrap();
        let products = repository::product::find_all(&db.pool).await.unwrap();
        assert_eq!(materials.len(), 3);
        assert_eq!(products.len(), 3);
        assert_eq!(materials[1].sku, "MAT-STEEL");
        assert_eq!(materials[1].min_stock_level, 20);

        let logs = repository::inventory_log::find_all(&db.pool).await.unwrap();
        assert_eq!(logs.len(), 6);
        assert!(logs.iter().all(|l| l.action == LogAction::Create));
    }
}
