/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Middleware
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer` - any origin may `GET` and `POST`, as browser clients of
 *   the board are served from other origins
 */

use axum::{
    http::{Method, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::thread_routes::configure_thread_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /threads` - list posts
/// - `POST /threads` - create post
/// - `GET /realtime` - real-time subscription
/// - `GET /health` - health check
///
/// Unknown routes return a JSON 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_thread_routes(Router::new());
    let router = configure_api_routes(router);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    router
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}
