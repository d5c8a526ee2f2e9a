//! Scan API
//!
//! Detection updates keyed by SKU, as posted by a camera client.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/scan", post(handler::scan))
}
