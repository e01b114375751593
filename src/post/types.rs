use serde::{Deserialize, Serialize};

use super::models::PostModel;

/// Response for listing the posts of a room
#[derive(Debug, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostModel>,
}
