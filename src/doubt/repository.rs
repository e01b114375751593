use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::DoubtModel;
use crate::shared::lock_collection;

/// Trait for doubt repository operations
#[async_trait]
pub trait DoubtRepository {
    /// Appends a doubt to the room's sequence, creating the sequence if absent
    async fn create_doubt(&self, room_id: &str, doubt: &DoubtModel);

    /// Doubts for a room key in insertion order, empty when the key is unknown
    async fn list_doubts(&self, room_id: &str) -> Vec<DoubtModel>;
}

/// In-memory implementation of DoubtRepository
pub struct InMemoryDoubtRepository {
    doubts: Mutex<HashMap<String, Vec<DoubtModel>>>,
}

impl Default for InMemoryDoubtRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDoubtRepository {
    pub fn new() -> Self {
        Self {
            doubts: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DoubtRepository for InMemoryDoubtRepository {
    #[instrument(skip(self, doubt))]
    async fn create_doubt(&self, room_id: &str, doubt: &DoubtModel) {
        let mut doubts = lock_collection(&self.doubts);
        let room_doubts = doubts.entry(room_id.to_string()).or_default();
        room_doubts.push(doubt.clone());

        debug!(room_id = %room_id, doubt_count = room_doubts.len(), "Doubt appended in memory");
    }

    #[instrument(skip(self))]
    async fn list_doubts(&self, room_id: &str) -> Vec<DoubtModel> {
        let doubts = lock_collection(&self.doubts);
        doubts.get(room_id).cloned().unwrap_or_default()
    }
}
