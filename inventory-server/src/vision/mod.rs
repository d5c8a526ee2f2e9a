//! Vision status logging
//!
//! A simulated scan writes one `vision_status_logs` row. Clean (OK) scans
//! also refresh the product's detection fields and append a SCAN entry to the
//! inventory log, all in one transaction.

pub mod simulator;

use rand::Rng;
use serde::Serialize;
use shared::models::{
    BoundingBox, EntityType, LogAction, ProductUpdate, VisionStatus, VisionStatusLog,
    VisionStatusLogCreate,
};
use sqlx::AnyPool;

use crate::db::repository::{self, inventory_log::NewLog};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Default number of log entries returned
pub const DEFAULT_LOG_LIMIT: i64 = 50;

/// Upper bound for a requested log limit
pub const MAX_LOG_LIMIT: i64 = 200;

/// Result of a simulated scan, as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub status: VisionStatus,
    pub confidence_score: f64,
    pub bounding_box: BoundingBox,
    pub detected_class: String,
    pub notes: Option<String>,
    pub sku: String,
    pub product_id: i64,
    pub product_name: String,
    pub timestamp: i64,
}

/// Clamp a requested limit to `1..=MAX_LOG_LIMIT`
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LOG_LIMIT).clamp(1, MAX_LOG_LIMIT)
}

/// Recent vision logs, optionally filtered by status
pub async fn status_logs(
    pool: &AnyPool,
    status: Option<VisionStatus>,
    limit: Option<i64>,
) -> AppResult<Vec<VisionStatusLog>> {
    Ok(repository::vision_log::find_recent(pool, status, clamp_limit(limit)).await?)
}

/// The most recent non-OK detections
pub async fn anomalies(pool: &AnyPool) -> AppResult<Vec<VisionStatusLog>> {
    Ok(repository::vision_log::find_anomalies(pool, DEFAULT_LOG_LIMIT).await?)
}

/// Run one simulated scan and persist its outcome
pub async fn run_scan<R: Rng + Send>(pool: &AnyPool, rng: &mut R) -> AppResult<ScanOutcome> {
    let products = repository::product::find_all(pool).await?;
    let detection = simulator::simulate(rng, &products).ok_or_else(|| {
        AppError::with_message(ErrorCode::NothingToScan, "No products available to scan")
    })?;

    let mut tx = repository::begin(pool).await?;
    let log = repository::vision_log::append(
        &mut *tx,
        &VisionStatusLogCreate {
            product_id: detection.product_id,
            sku: detection.sku.clone(),
            status: detection.status,
            confidence_score: detection.confidence_score,
            detected_class: Some(detection.detected_class.clone()),
            bounding_box: Some(detection.bounding_box),
            notes: detection.notes.clone(),
        },
    )
    .await?;

    if let Some(attributes) = &detection.attributes {
        let patch = ProductUpdate {
            detected_color: Some(attributes.color.clone()),
            detected_texture: Some(attributes.texture.clone()),
            detected_dimensions: Some(attributes.dimensions.clone()),
            last_scanned_at: Some(log.timestamp),
            ..Default::default()
        };
        repository::product::update(&mut *tx, detection.product_id, &patch).await?;
        repository::inventory_log::append(
            &mut *tx,
            NewLog {
                action: LogAction::Scan,
                entity_type: EntityType::Product,
                entity_id: detection.product_id,
                change_amount: 0.0,
                description: Some("Vision Engine Scan"),
            },
        )
        .await?;
    }
    repository::commit(tx).await?;

    if detection.status.is_anomaly() {
        tracing::warn!(
            product_id = detection.product_id,
            sku = %detection.sku,
            status = %detection.status,
            confidence = detection.confidence_score,
            "Vision anomaly detected"
        );
    } else {
        tracing::info!(product_id = detection.product_id, sku = %detection.sku, "Vision scan OK");
    }

    Ok(ScanOutcome {
        status: detection.status,
        confidence_score: detection.confidence_score,
        bounding_box: detection.bounding_box,
        detected_class: detection.detected_class,
        notes: detection.notes,
        sku: detection.sku,
        product_id: detection.product_id,
        product_name: detection.product_name,
        timestamp: log.timestamp,
    })
}
