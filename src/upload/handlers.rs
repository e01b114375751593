use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart,
    },
    Json,
};
use tracing::{info, instrument, warn};

use super::types::UploadResponse;
use crate::shared::AppError;

pub const UPLOAD_FIELD: &str = "file";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
const NO_SUCH_FILE: &str = "no multipart file field named `file`";

/// HTTP handler for file uploads
///
/// POST /upload
/// Accepts a multipart form with a `file` part carrying a filename. The
/// content is read and thrown away; only the filename is echoed back.
#[instrument(name = "upload_file", skip_all)]
pub async fn upload_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected upload request");
        AppError::MissingFile(rejection.body_text())
    })?;

    while let Some(field) = multipart.next_field().await.map_err(missing_file)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // A `file` part without a filename is a plain form value, not a file
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let size = discard(field).await?;
        info!(filename = %filename, size_bytes = size, "Upload received and discarded");

        return Ok(Json(UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            filename,
        }));
    }

    warn!("Upload request had no file part");
    Err(AppError::MissingFile(NO_SUCH_FILE.to_string()))
}

/// Drains a field without keeping its content, returning the byte count
async fn discard(mut field: Field<'_>) -> Result<usize, AppError> {
    let mut size = 0;
    while let Some(chunk) = field.chunk().await.map_err(missing_file)? {
        size += chunk.len();
    }
    Ok(size)
}

fn missing_file(err: MultipartError) -> AppError {
    warn!(error = %err.body_text(), "Failed to read multipart body");
    AppError::MissingFile(err.body_text())
}
