//! Inventory ledger operations
//!
//! Every stock mutation runs in one transaction together with the
//! `inventory_logs` row describing it:
//!
//! | Operation | Log action | Change amount |
//! |-----------|------------|---------------|
//! | create material / product | CREATE | initial quantity |
//! | manual quantity edit | ADJUSTMENT | new - old |
//! | sale | SALE | -quantity |
//! | restock | RESTOCK | +quantity |
//! | scan | SCAN | 0 |

pub mod material;
pub mod product;
pub mod sale;

pub use material::{create_material, update_material};
pub use product::{create_product, process_scan, restock_product, update_product};
pub use sale::record_sale;

use shared::models::EntityType;
use sqlx::AnyConnection;

use crate::db::repository::{self, RepoError};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Reject a SKU already used by a material or a product
///
/// `owner` names the row allowed to keep the SKU (the one being updated).
pub(crate) async fn ensure_sku_available(
    conn: &mut AnyConnection,
    sku: &str,
    owner: Option<(EntityType, i64)>,
    code: ErrorCode,
) -> AppResult<()> {
    if let Some(material) = repository::material::find_by_sku(&mut *conn, sku).await?
        && owner != Some((EntityType::Material, material.id))
    {
        return Err(sku_taken(code, sku));
    }
    if let Some(product) = repository::product::find_by_sku(&mut *conn, sku).await?
        && owner != Some((EntityType::Product, product.id))
    {
        return Err(sku_taken(code, sku));
    }
    Ok(())
}

/// Map a unique-index violation on insert/update to the SKU conflict error
pub(crate) fn map_sku_conflict(err: RepoError, code: ErrorCode, sku: &str) -> AppError {
    match err {
        RepoError::Duplicate(_) => sku_taken(code, sku),
        other => other.into(),
    }
}

fn sku_taken(code: ErrorCode, sku: &str) -> AppError {
    AppError::with_message(code, format!("SKU {sku} already exists")).with_detail("sku", sku)
}
