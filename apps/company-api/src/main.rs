use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use firestore_client::FirestoreClient;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        "Initializing Firestore client for project {}",
        config.firestore.project_id
    );

    // The client validates the service-account key up front, so credential
    // problems fail here instead of on the first request
    let firestore = FirestoreClient::new(config.firestore.clone())
        .map_err(|e| eyre::eyre!("Failed to initialize Firestore client: {}", e))?;

    // Initialize the application state
    let state = AppState { config, firestore };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoint
    let app = router.merge(health_router(state.config.app));

    info!("Starting Company Management API with graceful shutdown (30s timeout)");

    let server_config = state.config.server.clone();
    let firestore = state.firestore.clone();

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing Firestore client");
            // The HTTP pool closes when the last clone drops
            drop(firestore);
            info!("Firestore client released");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Company Management API shutdown complete");
    Ok(())
}
