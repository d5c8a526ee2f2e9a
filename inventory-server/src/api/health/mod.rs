//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | service version and database reachability |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    backend: &'static str,
    /// ok | error
    status: &'static str,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state.db.ping().await;
    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        service: "inventory-server",
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            backend: state.db.backend.name(),
            status: if db_ok { "ok" } else { "error" },
        },
    })
}
