//! Vision Status Log Repository
//!
//! The bounding box is stored as four nullable columns.

use super::{RepoError, RepoResult};
use shared::models::{BoundingBox, VisionStatus, VisionStatusLog, VisionStatusLogCreate};
use sqlx::{Any, Executor};

#[derive(Debug, sqlx::FromRow)]
struct VisionStatusLogRow {
    id: i64,
    timestamp: i64,
    product_id: i64,
    sku: String,
    status: String,
    confidence_score: f64,
    detected_class: Option<String>,
    bbox_x: Option<i64>,
    bbox_y: Option<i64>,
    bbox_width: Option<i64>,
    bbox_height: Option<i64>,
    notes: Option<String>,
}

impl TryFrom<VisionStatusLogRow> for VisionStatusLog {
    type Error = RepoError;

    fn try_from(row: VisionStatusLogRow) -> Result<Self, Self::Error> {
        let status =
            VisionStatus::try_from(row.status).map_err(|e| RepoError::Database(e.to_string()))?;
        let bounding_box = match (row.bbox_x, row.bbox_y, row.bbox_width, row.bbox_height) {
            (Some(x), Some(y), Some(width), Some(height)) => Some(BoundingBox {
                x,
                y,
                width,
                height,
            }),
            _ => None,
        };
        Ok(Self {
            id: row.id,
            timestamp: row.timestamp,
            product_id: row.product_id,
            sku: row.sku,
            status,
            confidence_score: row.confidence_score,
            detected_class: row.detected_class,
            bounding_box,
            notes: row.notes,
        })
    }
}

fn into_logs(rows: Vec<VisionStatusLogRow>) -> RepoResult<Vec<VisionStatusLog>> {
    rows.into_iter().map(VisionStatusLog::try_from).collect()
}

/// Most recent entries, optionally restricted to one status
pub async fn find_recent<'e, E>(
    executor: E,
    status: Option<VisionStatus>,
    limit: i64,
) -> RepoResult<Vec<VisionStatusLog>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = match status {
        Some(status) => {
            sqlx::query_as::<_, VisionStatusLogRow>(
                "SELECT id, timestamp, product_id, sku, status, confidence_score, detected_class, bbox_x, bbox_y, bbox_width, bbox_height, notes FROM vision_status_logs WHERE status = $1 ORDER BY timestamp DESC, id DESC LIMIT $2",
            )
            .bind(status.as_str())
            .bind(limit)
            .fetch_all(executor)
            .await?
        }
        None => {
            sqlx::query_as::<_, VisionStatusLogRow>(
                "SELECT id, timestamp, product_id, sku, status, confidence_score, detected_class, bbox_x, bbox_y, bbox_width, bbox_height, notes FROM vision_status_logs ORDER BY timestamp DESC, id DESC LIMIT $1",
            )
            .bind(limit)
            .fetch_all(executor)
            .await?
        }
    };
    into_logs(rows)
}

/// Most recent entries with any status other than OK
pub async fn find_anomalies<'e, E>(executor: E, limit: i64) -> RepoResult<Vec<VisionStatusLog>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, VisionStatusLogRow>(
        "SELECT id, timestamp, product_id, sku, status, confidence_score, detected_class, bbox_x, bbox_y, bbox_width, bbox_height, notes FROM vision_status_logs WHERE status IN ('DAMAGED', 'NON_STANDARD', 'UNKNOWN') ORDER BY timestamp DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(executor)
    .await?;
    into_logs(rows)
}

/// Append one entry with a server timestamp
pub async fn append<'e, E>(executor: E, data: &VisionStatusLogCreate) -> RepoResult<VisionStatusLog>
where
    E: Executor<'e, Database = Any>,
{
    let now = shared::util::now_millis();
    let bbox = data.bounding_box;
    let row = sqlx::query_as::<_, VisionStatusLogRow>(
        "INSERT INTO vision_status_logs (timestamp, product_id, sku, status, confidence_score, detected_class, bbox_x, bbox_y, bbox_width, bbox_height, notes) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id, timestamp, product_id, sku, status, confidence_score, detected_class, bbox_x, bbox_y, bbox_width, bbox_height, notes",
    )
    .bind(now)
    .bind(data.product_id)
    .bind(&data.sku)
    .bind(data.status.as_str())
    .bind(data.confidence_score)
    .bind(data.detected_class.as_deref())
    .bind(bbox.map(|b| b.x))
    .bind(bbox.map(|b| b.y))
    .bind(bbox.map(|b| b.width))
    .bind(bbox.map(|b| b.height))
    .bind(data.notes.as_deref())
    .fetch_one(executor)
    .await?;
    VisionStatusLog::try_from(row)
}
