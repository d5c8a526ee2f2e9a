//! Inventory Server - stock ledger for a furniture workshop
//!
//! # Overview
//!
//! REST service tracking raw materials, finished products and sales. Every
//! stock movement is recorded in an append-only inventory log. On top of the
//! ledger sit a demand forecast, a simulated vision scanner and a chat
//! assistant backed by an external completion API.
//!
//! # Module layout
//!
//! ```text
//! inventory-server/src/
//! ├── core/          # config, shared state, HTTP server
//! ├── db/            # pool, migrations, repositories, seed data
//! ├── inventory/     # transactional stock operations
//! ├── analytics/     # demand forecast
//! ├── vision/        # scan simulator and status logs
//! ├── chat/          # completion client
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, validation, extractors
//! ```

pub mod analytics;
pub mod api;
pub mod chat;
pub mod core;
pub mod db;
pub mod inventory;
pub mod utils;
pub mod vision;

pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;
