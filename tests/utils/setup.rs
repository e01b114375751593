use axum::Router;

use study_rooms::{config::Config, routes::build_router, seed::seed_demo_data, AppState};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestAppBuilder {
    config: Config,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_demo_data(mut self) -> Self {
        self.config.seed_demo_data = true;
        self
    }

    pub fn with_upload_limit(mut self, limit: usize) -> Self {
        self.config.upload_limit_bytes = limit;
        self
    }

    pub async fn build(self) -> TestApp {
        let state = AppState::in_memory();
        if self.config.seed_demo_data {
            seed_demo_data(&state).await;
        }

        TestApp {
            router: build_router(state.clone(), &self.config),
            state,
        }
    }
}
