// Study rooms HTTP service: rooms, posts, doubts and a stub upload endpoint,
// all held in process memory behind the router built by `routes::build_router`

pub mod config;
pub mod doubt;
pub mod post;
pub mod room;
pub mod routes;
pub mod seed;
pub mod shared;
pub mod upload;

// Re-export commonly used types for easier access in tests
pub use config::{Config, ConfigError};
pub use doubt::models::DoubtModel;
pub use post::models::PostModel;
pub use room::models::RoomModel;
pub use shared::{AppError, AppState};
