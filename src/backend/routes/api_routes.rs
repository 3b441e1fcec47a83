/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /auth/sign-up` - User registration
 * - `POST /auth/sign-in` - User login
 *
 * ## Users (requires authentication)
 * - `GET /users/me` - Current user profile
 * - `PATCH /users` - Edit current user profile
 *
 * ## Bookmarks (requires authentication)
 * - `GET /bookmarks`, `POST /bookmarks`
 * - `GET /bookmarks/{id}`, `PATCH /bookmarks/{id}`, `DELETE /bookmarks/{id}`
 */

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{sign_in, sign_up};
use crate::backend::bookmarks::{
    create_bookmark, delete_bookmark_by_id, edit_bookmark_by_id, get_bookmark_by_id, get_bookmarks,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::{edit_user, get_me};

/// Add the public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
}

/// Routes that require a valid bearer token
///
/// The auth middleware is attached with `route_layer`, so it only runs for
/// requests that matched one of these routes; unknown paths still reach the
/// fallback instead of answering 401.
pub fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
        .route("/bookmarks", get(get_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark_by_id)
                .patch(edit_bookmark_by_id)
                .delete(delete_bookmark_by_id),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
}
