use std::process::ExitCode;

use study_rooms::{config::Config, routes::build_router, seed::seed_demo_data, AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "study_rooms=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    info!(?config, "Starting study rooms server");

    // Collections are created empty and live as long as the process
    let app_state = AppState::in_memory();
    if config.seed_demo_data {
        seed_demo_data(&app_state).await;
    }

    let app = build_router(app_state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
