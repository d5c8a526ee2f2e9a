//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and database check
//! - [`materials`] - raw material CRUD
//! - [`products`] - product CRUD and restock
//! - [`scan`] - detection updates by SKU
//! - [`sales`] - sale recording
//! - [`logs`] - inventory log (read only)
//! - [`analytics`] - demand forecasts and reorder suggestions
//! - [`vision`] - vision status logs and simulated scans
//! - [`chat`] - inventory assistant

pub mod analytics;
pub mod chat;
pub mod health;
pub mod logs;
pub mod materials;
pub mod products;
pub mod sales;
pub mod scan;
pub mod vision;

use axum::Router;
use http::HeaderName;
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(materials::router())
        .merge(products::router())
        .merge(scan::router())
        .merge(sales::router())
        .merge(logs::router())
        .merge(analytics::router())
        .merge(vision::router())
        .merge(chat::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static("x-request-id");
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - echo to the response, generated when absent
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

/// `{success, data, count}` envelope used by the analytics and vision lists
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
