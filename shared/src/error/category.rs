//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Sale errors
/// - 5xxx: Vision errors
/// - 6xxx: Product errors
/// - 7xxx: Material errors
/// - 8xxx: Assistant errors
/// - 9xxx: System errors
///
/// 1xxx-3xxx are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Sale errors (4xxx)
    Sale,
    /// Vision errors (5xxx)
    Vision,
    /// Product errors (6xxx)
    Product,
    /// Material errors (7xxx)
    Material,
    /// Assistant errors (8xxx)
    Assistant,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..4000 => Self::General,
            4000..5000 => Self::Sale,
            5000..6000 => Self::Vision,
            6000..7000 => Self::Product,
            7000..8000 => Self::Material,
            8000..9000 => Self::Assistant,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Sale => "sale",
            Self::Vision => "vision",
            Self::Product => "product",
            Self::Material => "material",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Sale);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Vision);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Material);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Assistant);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::SaleInvalidQuantity.category(),
            ErrorCategory::Sale
        );
        assert_eq!(ErrorCode::NothingToScan.category(), ErrorCategory::Vision);
        assert_eq!(
            ErrorCode::ProductNotFound.category(),
            ErrorCategory::Product
        );
        assert_eq!(
            ErrorCode::MaterialSkuExists.category(),
            ErrorCategory::Material
        );
        assert_eq!(
            ErrorCode::ChatNotConfigured.category(),
            ErrorCategory::Assistant
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Material).unwrap();
        assert_eq!(json, "\"material\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
        assert_eq!(category.name(), "system");
    }
}
