use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::RoomService,
    types::{JoinRoomRequest, JoinRoomResponse, RoomCreateRequest, RoomListResponse, RoomResponse},
};
use crate::shared::{AppState, JsonBody};

/// HTTP handler for listing all rooms
///
/// GET /rooms
/// Returns every room in creation order
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(State(state): State<AppState>) -> Json<RoomListResponse> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let rooms = service.list_rooms().await;

    info!(room_count = rooms.len(), "Rooms listed successfully");

    Json(RoomListResponse { rooms })
}

/// HTTP handler for creating a new room
///
/// POST /rooms
#[instrument(name = "create_room", skip(state))]
pub async fn create_room(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RoomCreateRequest>,
) -> Json<RoomResponse> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.create_room(request).await;

    Json(RoomResponse { room })
}

/// HTTP handler for joining a room by invite code
///
/// POST /rooms/join
/// Always succeeds and echoes the invite code back
#[instrument(name = "join_room", skip(state))]
pub async fn join_room(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<JoinRoomRequest>,
) -> Json<JoinRoomResponse> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    Json(service.join_room(request).await)
}
