//! Unified error codes for the inventory service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Sale errors
//! - 5xxx: Vision errors
//! - 6xxx: Product errors
//! - 7xxx: Material errors
//! - 8xxx: Assistant (chat) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can switch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Sale ====================
    /// Sale quantity must be positive
    SaleInvalidQuantity = 4001,
    /// Sale total price must not be negative
    SaleInvalidTotal = 4002,

    // ==================== 5xxx: Vision ====================
    /// No product available to scan
    NothingToScan = 5001,
    /// Unknown vision status
    VisionInvalidStatus = 5002,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product SKU already exists
    ProductSkuExists = 6002,
    /// Product has invalid price
    ProductInvalidPrice = 6003,
    /// Reorder quantity must be positive
    ProductInvalidReorder = 6004,

    // ==================== 7xxx: Material ====================
    /// Material not found
    MaterialNotFound = 7001,
    /// Material SKU already exists
    MaterialSkuExists = 7002,

    // ==================== 8xxx: Assistant ====================
    /// Chat provider is not configured
    ChatNotConfigured = 8001,
    /// Chat provider returned an unusable answer
    ChatUpstreamFailed = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Sale
            ErrorCode::SaleInvalidQuantity => "Sale quantity must be a positive integer",
            ErrorCode::SaleInvalidTotal => "Sale total price must not be negative",

            // Vision
            ErrorCode::NothingToScan => "No products available to scan",
            ErrorCode::VisionInvalidStatus => "Unknown vision status",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductSkuExists => "Product SKU already exists",
            ErrorCode::ProductInvalidPrice => "Product price must not be negative",
            ErrorCode::ProductInvalidReorder => "Reorder quantity must be a positive integer",

            // Material
            ErrorCode::MaterialNotFound => "Material not found",
            ErrorCode::MaterialSkuExists => "Material SKU already exists",

            // Assistant
            ErrorCode::ChatNotConfigured => "Chat assistant is not configured",
            ErrorCode::ChatUpstreamFailed => "Chat assistant returned no answer",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Sale
            4001 => Ok(ErrorCode::SaleInvalidQuantity),
            4002 => Ok(ErrorCode::SaleInvalidTotal),

            // Vision
            5001 => Ok(ErrorCode::NothingToScan),
            5002 => Ok(ErrorCode::VisionInvalidStatus),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductSkuExists),
            6003 => Ok(ErrorCode::ProductInvalidPrice),
            6004 => Ok(ErrorCode::ProductInvalidReorder),

            // Material
            7001 => Ok(ErrorCode::MaterialNotFound),
            7002 => Ok(ErrorCode::MaterialSkuExists),

            // Assistant
            8001 => Ok(ErrorCode::ChatNotConfigured),
            8002 => Ok(ErrorCode::ChatUpstreamFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
