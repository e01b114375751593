use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::RoomModel;
use crate::shared::lock_collection;

/// Trait for room repository operations
#[async_trait]
pub trait RoomRepository {
    /// Appends a room to the end of the room list
    async fn create_room(&self, room: &RoomModel);

    /// Returns every room in insertion order
    async fn list_rooms(&self) -> Vec<RoomModel>;
}

/// In-memory implementation of RoomRepository
pub struct InMemoryRoomRepository {
    rooms: Mutex<Vec<RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room))]
    async fn create_room(&self, room: &RoomModel) {
        let mut rooms = lock_collection(&self.rooms);
        rooms.push(room.clone());

        debug!(
            name = %room.name,
            position = rooms.len() - 1,
            "Room appended in memory"
        );
    }

    #[instrument(skip(self))]
    async fn list_rooms(&self) -> Vec<RoomModel> {
        let rooms = lock_collection(&self.rooms);
        debug!(room_count = rooms.len(), "Listing all rooms in memory");
        rooms.clone()
    }
}
