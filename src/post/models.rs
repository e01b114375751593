use serde::{Deserialize, Serialize};

/// A post grouped under a caller-supplied room key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostModel {
    pub room_id: String,
    pub title: String,
    pub content: String,
}

impl PostModel {
    pub fn new(
        room_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
