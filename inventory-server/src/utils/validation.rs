//! Input validation helpers
//!
//! Centralized text length limits and numeric checks used by the inventory
//! services before anything is written.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: material, product
pub const MAX_NAME_LEN: usize = 200;

/// SKUs and unit labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Descriptions and detection attributes
pub const MAX_NOTE_LEN: usize = 500;

/// Chat questions
pub const MAX_MESSAGE_LEN: usize = 4000;

// ── Numeric limits ──────────────────────────────────────────────────

/// Largest stock count or movement accepted in one request
pub const MAX_QUANTITY: i64 = 1_000_000_000;

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_max_len(value, field, max_len)
}

/// Validate that a string (possibly empty) is within the length limit.
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_max_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an optional replacement for a required string (present means non-empty).
pub fn validate_optional_required_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

// ── Numeric helpers ─────────────────────────────────────────────────

/// Validate a count that may be zero but never negative.
pub fn validate_non_negative(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field));
    }
    validate_max_quantity(value, field)
}

/// Validate that a count does not exceed [`MAX_QUANTITY`].
pub fn validate_max_quantity(value: i64, field: &str) -> Result<(), AppError> {
    if value > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not exceed {MAX_QUANTITY}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a monetary amount: finite and not negative.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative number"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a count that must be strictly positive, reporting `code` on failure.
pub fn validate_positive(value: i64, field: &str, code: ErrorCode) -> Result<(), AppError> {
    if value <= 0 {
        return Err(
            AppError::with_message(code, format!("{field} must be greater than 0"))
                .with_detail("field", field),
        );
    }
    validate_max_quantity(value, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Oak Wood", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name must not be empty");

        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_required_text(&long, "sku", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "description", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some(String::new()), "description", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_required_text(&Some("".into()), "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_required_text(&None, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_numeric() {
        assert!(validate_non_negative(0, "quantity").is_ok());
        assert!(validate_non_negative(-1, "quantity").is_err());

        assert!(validate_amount(0.0, "price").is_ok());
        assert!(validate_amount(-0.01, "price").is_err());
        assert!(validate_amount(f64::NAN, "price").is_err());

        let err = validate_positive(0, "quantity", ErrorCode::SaleInvalidQuantity).unwrap_err();
        assert_eq!(err.code, ErrorCode::SaleInvalidQuantity);
        assert!(validate_positive(1, "quantity", ErrorCode::SaleInvalidQuantity).is_ok());
    }

    #[test]
    fn test_quantity_upper_bound() {
        assert!(validate_non_negative(MAX_QUANTITY, "quantity").is_ok());
        let err = validate_non_negative(MAX_QUANTITY + 1, "quantity").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = validate_positive(i64::MAX, "quantity", ErrorCode::SaleInvalidQuantity).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }
}
