use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::DoubtService,
    types::{DoubtCreateRequest, DoubtListResponse, DoubtResponse},
};
use crate::shared::{AppState, JsonBody};

/// HTTP handler for asking a doubt in a room
///
/// POST /rooms/:roomId/doubts
#[instrument(name = "create_doubt", skip(state))]
pub async fn create_doubt(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    JsonBody(request): JsonBody<DoubtCreateRequest>,
) -> Json<DoubtResponse> {
    let service = DoubtService::new(Arc::clone(&state.doubt_repository));
    let doubt = service.create_doubt(&room_id, request).await;

    Json(DoubtResponse { room_id, doubt })
}

/// HTTP handler for listing the doubts of a room
///
/// GET /rooms/:roomId/doubts
#[instrument(name = "list_doubts", skip(state))]
pub async fn list_doubts(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Json<DoubtListResponse> {
    let service = DoubtService::new(Arc::clone(&state.doubt_repository));
    let doubts = service.list_doubts(&room_id).await;

    info!(room_id = %room_id, doubt_count = doubts.len(), "Doubts listed successfully");

    Json(DoubtListResponse { doubts })
}
