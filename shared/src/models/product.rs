//! Product Model

use serde::{Deserialize, Serialize};

/// Finished product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Globally unique stock keeping unit, also the code a scan reports
    pub sku: String,
    pub description: Option<String>,
    /// Authoritative current stock, may go negative after oversold sales
    pub quantity: i64,
    pub price: f64,
    pub detected_color: Option<String>,
    pub detected_texture: Option<String>,
    /// e.g. "120x80x75"
    pub detected_dimensions: Option<String>,
    pub last_scanned_at: Option<i64>,
    pub predicted_stock: Option<i64>,
    pub predicted_demand: Option<i64>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    pub price: f64,
    pub detected_color: Option<String>,
    pub detected_texture: Option<String>,
    pub detected_dimensions: Option<String>,
}

/// Update product payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub detected_color: Option<String>,
    pub detected_texture: Option<String>,
    pub detected_dimensions: Option<String>,
    /// Only set by the scan flow, never accepted from a request body
    #[serde(skip)]
    pub last_scanned_at: Option<i64>,
}

/// Detection attributes reported by a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanInput {
    pub sku: String,
    pub detected_color: Option<String>,
    pub detected_texture: Option<String>,
    pub detected_dimensions: Option<String>,
}

/// Restock request (`quantity` defaults to [`DEFAULT_REORDER_QUANTITY`])
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderInput {
    pub quantity: Option<i64>,
}

/// Units added by a restock request without an explicit quantity
pub const DEFAULT_REORDER_QUANTITY: i64 = 50;

/// `{message, product}` body returned by restock and scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductActionResponse {
    pub message: String,
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ignores_last_scanned_at_from_json() {
        let patch: ProductUpdate =
            serde_json::from_str(r#"{"price":10.0,"lastScannedAt":123}"#).unwrap();
        assert_eq!(patch.price, Some(10.0));
        assert!(patch.last_scanned_at.is_none());
    }

    #[test]
    fn test_scan_input_camel_case() {
        let input: ScanInput =
            serde_json::from_str(r#"{"sku":"PROD-001","detectedColor":"Oak Brown"}"#).unwrap();
        assert_eq!(input.sku, "PROD-001");
        assert_eq!(input.detected_color.as_deref(), Some("Oak Brown"));
        assert!(input.detected_texture.is_none());
    }

    #[test]
    fn test_reorder_input_empty_body() {
        let input: ReorderInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.quantity.unwrap_or(DEFAULT_REORDER_QUANTITY), 50);
    }
}
