use serde::{Deserialize, Serialize};

use crate::shared::null_as_default;

use super::models::RoomModel;

/// Request payload for creating a new room. Missing or null fields become empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomCreateRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invite_code: String,
}

/// Request payload for joining a room by invite code
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JoinRoomRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub invite_code: String,
}

/// Response for room creation
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomResponse {
    pub room: RoomModel,
}

/// Response for listing rooms, in creation order
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomModel>,
}

/// Response for joining a room
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponse {
    pub message: String,
    pub invite_code: String,
}
