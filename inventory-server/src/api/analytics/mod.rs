//! Analytics API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/analytics/forecast | GET | seven-day forecast for every product |
//! | /api/analytics/forecast/{id}?days=N | GET | forecast for one product, N in 1..=90 |
//! | /api/analytics/reorder-suggestions | GET | products projected to run low |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", analytics_routes())
}

fn analytics_routes() -> Router<ServerState> {
    Router::new()
        .route("/forecast", get(handler::forecast_all))
        .route("/forecast/{id}", get(handler::forecast_one))
        .route("/reorder-suggestions", get(handler::reorder_suggestions))
}
