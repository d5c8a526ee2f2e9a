//! Raw Material Model

use serde::{Deserialize, Serialize};

/// Default reorder threshold for new materials
pub const DEFAULT_MIN_STOCK_LEVEL: i64 = 10;

/// Raw material entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Material {
    pub id: i64,
    pub name: String,
    /// Globally unique stock keeping unit
    pub sku: String,
    pub quantity: i64,
    /// Free-form unit label ("planks", "kg", ...)
    pub unit: String,
    pub cost_per_unit: f64,
    pub min_stock_level: i64,
}

/// Create material payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCreate {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub quantity: i64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub min_stock_level: Option<i64>,
}

/// Update material payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<f64>,
    pub min_stock_level: Option<i64>,
}
