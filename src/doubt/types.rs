use serde::{Deserialize, Serialize};

use crate::shared::null_as_default;

use super::models::DoubtModel;

/// Request payload for asking a doubt. Missing or null fields become empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DoubtCreateRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// Response for doubt creation
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubtResponse {
    pub room_id: String,
    pub doubt: DoubtModel,
}

/// Response for listing the doubts of a room
#[derive(Debug, Serialize, Deserialize)]
pub struct DoubtListResponse {
    pub doubts: Vec<DoubtModel>,
}
