use serde::{Deserialize, Serialize};

/// A study room. Rooms have no identifier of their own; their position in the
/// room list is the only identity they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomModel {
    pub name: String,
    pub invite_code: String,
}

impl RoomModel {
    pub fn new(name: impl Into<String>, invite_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invite_code: invite_code.into(),
        }
    }
}
