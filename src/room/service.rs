use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::RoomModel,
    repository::RoomRepository,
    types::{JoinRoomRequest, JoinRoomResponse, RoomCreateRequest},
};

pub const JOIN_SUCCESS_MESSAGE: &str = "Joined room successfully!";

/// Service for handling room business logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a room and appends it to the room list. No duplicate detection.
    #[instrument(skip(self))]
    pub async fn create_room(&self, request: RoomCreateRequest) -> RoomModel {
        let room = RoomModel::new(request.name, request.invite_code);
        self.repository.create_room(&room).await;

        info!(
            name = %room.name,
            invite_code = %room.invite_code,
            "Room created successfully"
        );

        room
    }

    /// Lists all rooms in creation order
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Vec<RoomModel> {
        let rooms = self.repository.list_rooms().await;
        debug!(room_count = rooms.len(), "Rooms retrieved successfully");
        rooms
    }

    /// Acknowledges a join request.
    ///
    /// No room lookup happens and no membership is recorded: every invite code,
    /// including one that matches no room, gets the same success reply.
    #[instrument(skip(self))]
    pub async fn join_room(&self, request: JoinRoomRequest) -> JoinRoomResponse {
        info!(invite_code = %request.invite_code, "Join requested");

        JoinRoomResponse {
            message: JOIN_SUCCESS_MESSAGE.to_string(),
            invite_code: request.invite_code,
        }
    }
}
