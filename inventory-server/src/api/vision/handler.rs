//! Vision API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use shared::models::{VisionStatus, VisionStatusLog};

use crate::api::ListResponse;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use crate::vision::{self, ScanOutcome};

#[derive(Debug, Deserialize)]
pub struct StatusLogQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub data: ScanOutcome,
}

fn parse_status(raw: Option<String>) -> AppResult<Option<VisionStatus>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| {
            VisionStatus::try_from(s.trim().to_ascii_uppercase()).map_err(|e| {
                AppError::with_message(ErrorCode::VisionInvalidStatus, e.to_string())
                    .with_detail("field", "status")
            })
        })
        .transpose()
}

/// GET /api/vision/status-logs
pub async fn status_logs(
    State(state): State<ServerState>,
    Query(query): Query<StatusLogQuery>,
) -> AppResult<Json<ListResponse<VisionStatusLog>>> {
    let status = parse_status(query.status)?;
    let logs = vision::status_logs(&state.db.pool, status, query.limit).await?;
    Ok(Json(ListResponse::new(logs)))
}

/// GET /api/vision/anomalies
pub async fn anomalies(
    State(state): State<ServerState>,
) -> AppResult<Json<ListResponse<VisionStatusLog>>> {
    let logs = vision::anomalies(&state.db.pool).await?;
    Ok(Json(ListResponse::new(logs)))
}

/// POST /api/vision/scan
pub async fn scan(State(state): State<ServerState>) -> AppResult<Json<ScanResponse>> {
    let mut rng = StdRng::from_entropy();
    let outcome = vision::run_scan(&state.db.pool, &mut rng).await?;
    Ok(Json(ScanResponse {
        success: true,
        data: outcome,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(None).unwrap(), None);
        assert_eq!(parse_status(Some("".into())).unwrap(), None);
        assert_eq!(
            parse_status(Some("damaged".into())).unwrap(),
            Some(VisionStatus::Damaged)
        );
        let err = parse_status(Some("broken".into())).unwrap_err();
        assert_eq!(err.code, ErrorCode::VisionInvalidStatus);
    }
}
