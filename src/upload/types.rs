use serde::{Deserialize, Serialize};

/// Response for an accepted upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}
