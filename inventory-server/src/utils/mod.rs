//! Utilities: error re-exports, logging, input validation and extractors
//!
//! - [`AppError`] / [`AppResult`] come from `shared::error`
//! - [`logger`] sets up the tracing subscriber
//! - [`validation`] holds the field checks used by the inventory services
//! - [`extract`] holds the JSON body extractor

pub mod extract;
pub mod logger;
pub mod validation;

pub use extract::ApiJson;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
