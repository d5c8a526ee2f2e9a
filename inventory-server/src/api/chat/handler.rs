//! Chat API Handlers

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::chat;
use crate::core::ServerState;
use crate::utils::{ApiJson, AppResult};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    /// RFC 3339
    pub timestamp: String,
}

/// POST /api/chat
pub async fn chat(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let response = chat::answer(&state.db.pool, &state.chat, &payload.message).await?;
    Ok(Json(ChatResponse {
        success: true,
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
