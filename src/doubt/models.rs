use serde::{Deserialize, Serialize};

/// A question asked within a room. The room key is held by the repository,
/// not by the doubt itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubtModel {
    pub title: String,
    pub content: String,
}

impl DoubtModel {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
