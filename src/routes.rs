use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::shared::AppState;
use crate::{doubt, room, upload};

pub const HEALTH_BODY: &str = "OK";

/// Builds the full HTTP router over the given state
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/rooms", get(room::list_rooms).post(room::create_room))
        .route("/rooms/join", post(room::join_room))
        .route("/rooms/:roomId/posts", get(crate::post::list_posts))
        .route(
            "/rooms/:roomId/doubts",
            get(doubt::list_doubts).post(doubt::create_doubt),
        )
        .route(
            "/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(config.upload_limit_bytes)),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allows every origin, with the usual methods and content headers
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(12 * 60 * 60))
}

async fn health() -> &'static str {
    HEALTH_BODY
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "Study Rooms backend is running!" }))
}
