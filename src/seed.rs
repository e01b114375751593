use tracing::{info, instrument};

use crate::post::models::PostModel;
use crate::room::models::RoomModel;
use crate::shared::AppState;

/// Loads a small demo data set so a fresh server has something to show
#[instrument(skip(state))]
pub async fn seed_demo_data(state: &AppState) {
    let rooms = [
        RoomModel::new("General Discussion", "GENERAL1"),
        RoomModel::new("Study Group", "STUDY123"),
    ];
    for room in &rooms {
        state.room_repository.create_room(room).await;
    }

    let welcome = PostModel::new(
        "1",
        "Welcome to the room!",
        "This is the first post in this room.",
    );
    state.post_repository.create_post(&welcome).await;

    info!(room_count = rooms.len(), post_count = 1, "Demo data seeded");
}
