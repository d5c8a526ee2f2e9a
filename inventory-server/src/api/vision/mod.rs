//! Vision API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/vision/status-logs?status=S&limit=N | GET | recent detections |
//! | /api/vision/anomalies | GET | recent non-OK detections |
//! | /api/vision/scan | POST | run one simulated scan |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/vision", vision_routes())
}

fn vision_routes() -> Router<ServerState> {
    Router::new()
        .route("/status-logs", get(handler::status_logs))
        .route("/anomalies", get(handler::anomalies))
        .route("/scan", post(handler::scan))
}
