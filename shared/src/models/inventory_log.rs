//! Inventory Audit Log Model

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a stored enum column holds an unknown value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Cause of an inventory movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    Create,
    Sale,
    Restock,
    Scan,
    Adjustment,
}

impl LogAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Sale => "SALE",
            Self::Restock => "RESTOCK",
            Self::Scan => "SCAN",
            Self::Adjustment => "ADJUSTMENT",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LogAction {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "CREATE" => Ok(Self::Create),
            "SALE" => Ok(Self::Sale),
            "RESTOCK" => Ok(Self::Restock),
            "SCAN" => Ok(Self::Scan),
            "ADJUSTMENT" => Ok(Self::Adjustment),
            _ => Err(UnknownVariant {
                kind: "log action",
                value,
            }),
        }
    }
}

/// Kind of entity a log entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Product,
    Material,
}

impl EntityType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "PRODUCT",
            Self::Material => "MATERIAL",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for EntityType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "PRODUCT" => Ok(Self::Product),
            "MATERIAL" => Ok(Self::Material),
            _ => Err(UnknownVariant {
                kind: "entity type",
                value,
            }),
        }
    }
}

/// Append-only inventory movement record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryLog {
    pub id: i64,
    pub timestamp: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub action: LogAction,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub entity_type: EntityType,
    pub entity_id: i64,
    /// Signed stock delta, 0 for scans
    pub change_amount: f64,
    pub description: Option<String>,
}
