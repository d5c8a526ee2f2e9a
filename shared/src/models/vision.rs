//! Vision Status Log Model
//!
//! Vision payloads keep snake_case field names on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::inventory_log::UnknownVariant;

/// Outcome of a visual inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisionStatus {
    Ok,
    Damaged,
    NonStandard,
    Unknown,
}

impl VisionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Damaged => "DAMAGED",
            Self::NonStandard => "NON_STANDARD",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Every status except `OK` counts as an anomaly
    pub const fn is_anomaly(&self) -> bool {
        !matches!(self, Self::Ok)
    }
}

impl fmt::Display for VisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for VisionStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "OK" => Ok(Self::Ok),
            "DAMAGED" => Ok(Self::Damaged),
            "NON_STANDARD" => Ok(Self::NonStandard),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(UnknownVariant {
                kind: "vision status",
                value,
            }),
        }
    }
}

/// Detection rectangle in image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Append-only record of one inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionStatusLog {
    pub id: i64,
    pub timestamp: i64,
    pub product_id: i64,
    pub sku: String,
    pub status: VisionStatus,
    pub confidence_score: f64,
    pub detected_class: Option<String>,
    pub bounding_box: Option<BoundingBox>,
    pub notes: Option<String>,
}

/// Insert payload for a vision status log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionStatusLogCreate {
    pub product_id: i64,
    pub sku: String,
    pub status: VisionStatus,
    pub confidence_score: f64,
    pub detected_class: Option<String>,
    pub bounding_box: Option<BoundingBox>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&VisionStatus::NonStandard).unwrap(),
            "\"NON_STANDARD\""
        );
        assert_eq!(
            VisionStatus::try_from("DAMAGED".to_string()),
            Ok(VisionStatus::Damaged)
        );
        assert!(VisionStatus::try_from("BROKEN".to_string()).is_err());
    }

    #[test]
    fn test_anomaly_statuses() {
        assert!(!VisionStatus::Ok.is_anomaly());
        assert!(VisionStatus::Damaged.is_anomaly());
        assert!(VisionStatus::NonStandard.is_anomaly());
        assert!(VisionStatus::Unknown.is_anomaly());
    }

    #[test]
    fn test_log_serializes_snake_case() {
        let log = VisionStatusLog {
            id: 4,
            timestamp: 1,
            product_id: 2,
            sku: "PROD-002".into(),
            status: VisionStatus::Ok,
            confidence_score: 0.9,
            detected_class: Some("002".into()),
            bounding_box: Some(BoundingBox {
                x: 50,
                y: 60,
                width: 100,
                height: 120,
            }),
            notes: None,
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["product_id"], 2);
        assert_eq!(json["confidence_score"], 0.9);
        assert_eq!(json["bounding_box"]["width"], 100);
    }
}
