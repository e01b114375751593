use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::warn;

use crate::doubt::repository::DoubtRepository;
use crate::post::repository::PostRepository;
use crate::room::repository::RoomRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository + Send + Sync>,
    pub post_repository: Arc<dyn PostRepository + Send + Sync>,
    pub doubt_repository: Arc<dyn DoubtRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository + Send + Sync>,
        post_repository: Arc<dyn PostRepository + Send + Sync>,
        doubt_repository: Arc<dyn DoubtRepository + Send + Sync>,
    ) -> Self {
        Self {
            room_repository,
            post_repository,
            doubt_repository,
        }
    }

    /// State backed by fresh, empty in-memory collections
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::room::repository::InMemoryRoomRepository::new()),
            Arc::new(crate::post::repository::InMemoryPostRepository::new()),
            Arc::new(crate::doubt::repository::InMemoryDoubtRepository::new()),
        )
    }
}

/// Client-facing errors. Both variants are binding failures and map to 400.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    MissingFile(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MalformedBody(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MissingFile(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// JSON body extractor that ignores the Content-Type header and reports every
/// read or parse failure as [`AppError::MalformedBody`].
///
/// The top-level value must be an object. A bare `null` binds to the
/// payload's default.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Failed to read request body");
            AppError::MalformedBody(rejection.body_text())
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(malformed)?;
        match value {
            Value::Null => Ok(JsonBody(T::default())),
            Value::Object(_) => serde_json::from_value(value).map(JsonBody).map_err(malformed),
            other => {
                let message = format!("cannot bind {} body, expected an object", json_kind(&other));
                warn!(error = %message, "Rejected malformed JSON body");
                Err(AppError::MalformedBody(message))
            }
        }
    }
}

fn malformed(err: serde_json::Error) -> AppError {
    warn!(error = %err, "Rejected malformed JSON body");
    AppError::MalformedBody(err.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field deserializer that reads an explicit `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Locks an in-memory collection. The collections are append-only, so a
/// guard left behind by a panicking holder is still consistent.
pub(crate) fn lock_collection<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
