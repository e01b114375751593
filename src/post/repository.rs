use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::PostModel;
use crate::shared::lock_collection;

/// Trait for post repository operations
#[async_trait]
pub trait PostRepository {
    /// Appends a post to the sequence keyed by its room id
    async fn create_post(&self, post: &PostModel);

    /// Posts for a room key in insertion order, empty when the key is unknown
    async fn list_posts(&self, room_id: &str) -> Vec<PostModel>;
}

/// In-memory implementation of PostRepository
pub struct InMemoryPostRepository {
    posts: Mutex<HashMap<String, Vec<PostModel>>>,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    #[instrument(skip(self, post))]
    async fn create_post(&self, post: &PostModel) {
        debug!(room_id = %post.room_id, title = %post.title, "Appending post in memory");

        let mut posts = lock_collection(&self.posts);
        posts
            .entry(post.room_id.clone())
            .or_default()
            .push(post.clone());
    }

    #[instrument(skip(self))]
    async fn list_posts(&self, room_id: &str) -> Vec<PostModel> {
        let posts = lock_collection(&self.posts);
        let room_posts = posts.get(room_id).cloned().unwrap_or_default();

        debug!(room_id = %room_id, post_count = room_posts.len(), "Listed posts from memory");
        room_posts
    }
}
