/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `Config`.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and apply migrations
 * 2. Build the services (`AppState::new`)
 * 3. Create and configure the router
 *
 * Any failure here is returned to the binary, which refuses to start.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, Config};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the database error if the pool cannot be opened or migrated.
pub async fn create_app(config: &Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing bookmark API server");

    let db_pool = load_database(&config.database_url).await?;

    let app_state = AppState::new(db_pool, &config.jwt_secret);
    tracing::info!("Services initialized");

    Ok(create_router(app_state))
}

/// Resolves when the process receives Ctrl-C
///
/// Passed to `axum::serve(..).with_graceful_shutdown` so in-flight requests
/// finish before the server exits.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
