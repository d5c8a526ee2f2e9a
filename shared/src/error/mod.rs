//! Unified error system for the inventory service
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code, a message and details
//! - [`ApiResponse`]: JSON body written for every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Sale errors
//! - 5xxx: Vision errors
//! - 6xxx: Product errors
//! - 7xxx: Material errors
//! - 8xxx: Assistant errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound);
//!
//! let err = AppError::validation("quantity must be positive")
//!     .with_detail("field", "quantity");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
