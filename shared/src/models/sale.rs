//! Sale Model

use serde::{Deserialize, Serialize};

/// Recorded sale, immutable once written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// Caller supplied, never recomputed from the product price
    pub total_price: f64,
    pub timestamp: i64,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreate {
    pub product_id: i64,
    pub quantity: i64,
    pub total_price: f64,
}
