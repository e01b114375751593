use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{service::PostService, types::PostListResponse};
use crate::shared::AppState;

/// HTTP handler for listing the posts of a room
///
/// GET /rooms/:roomId/posts
/// An unknown room id yields an empty list
#[instrument(name = "list_posts", skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Json<PostListResponse> {
    let service = PostService::new(Arc::clone(&state.post_repository));
    let posts = service.list_posts(&room_id).await;

    info!(room_id = %room_id, post_count = posts.len(), "Posts listed successfully");

    Json(PostListResponse { posts })
}
