// Public API - what other modules can use
pub use handlers::upload_file;

// Internal modules
mod handlers;
pub mod types;
