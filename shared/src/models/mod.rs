//! Data models
//!
//! Shared between the inventory server and its HTTP clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64`, all timestamps are Unix epoch milliseconds.

pub mod inventory_log;
pub mod material;
pub mod product;
pub mod sale;
pub mod vision;

// Re-exports
pub use inventory_log::*;
pub use material::*;
pub use product::*;
pub use sale::*;
pub use vision::*;
