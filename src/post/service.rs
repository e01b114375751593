use std::sync::Arc;
use tracing::{debug, instrument};

use super::{models::PostModel, repository::PostRepository};

/// Service for reading the posts of a room
pub struct PostService {
    repository: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Posts under `room_id` in insertion order. An unknown key is not an error.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, room_id: &str) -> Vec<PostModel> {
        let posts = self.repository.list_posts(room_id).await;
        debug!(room_id = %room_id, post_count = posts.len(), "Posts retrieved");
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::repository::InMemoryPostRepository;

    #[tokio::test]
    async fn test_list_posts_by_room() {
        let repository = Arc::new(InMemoryPostRepository::new());
        repository
            .create_post(&PostModel::new("r1", "Notes", "Chapter 1"))
            .await;
        let service = PostService::new(repository);

        assert_eq!(
            service.list_posts("r1").await,
            vec![PostModel::new("r1", "Notes", "Chapter 1")]
        );
        assert!(service.list_posts("r2").await.is_empty());
    }
}
