use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::DoubtModel, repository::DoubtRepository, types::DoubtCreateRequest};

/// Service for asking and listing doubts
pub struct DoubtService {
    repository: Arc<dyn DoubtRepository + Send + Sync>,
}

impl DoubtService {
    pub fn new(repository: Arc<dyn DoubtRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Appends a doubt under `room_id`. The key is not checked against the
    /// room list, so doubts can be attached to rooms that do not exist.
    #[instrument(skip(self))]
    pub async fn create_doubt(&self, room_id: &str, request: DoubtCreateRequest) -> DoubtModel {
        let doubt = DoubtModel::new(request.title, request.content);
        self.repository.create_doubt(room_id, &doubt).await;

        info!(room_id = %room_id, title = %doubt.title, "Doubt created successfully");

        doubt
    }

    #[instrument(skip(self))]
    pub async fn list_doubts(&self, room_id: &str) -> Vec<DoubtModel> {
        self.repository.list_doubts(room_id).await
    }
}
