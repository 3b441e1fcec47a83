/**
 * Router Configuration
 *
 * Combines the public and protected route sets into one Axum router, adds
 * request tracing and a JSON 404 fallback, and binds the application state.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, protected_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (services and database pool)
///
/// # Returns
///
/// Router ready to be passed to `axum::serve`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    let router = router.merge(protected_routes(&app_state));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Not Found") });

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}
