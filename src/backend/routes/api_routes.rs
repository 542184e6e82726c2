/**
 * API Route Handlers
 *
 * Operational endpoints that are not part of the thread surface.
 *
 * # Routes
 *
 * - `GET /health` - liveness, store backend and subscriber count
 */

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::backend::server::state::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub subscribers: usize,
}

/// Handle `GET /health`
pub async fn handle_health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store: app_state.posts.store().kind(),
        subscribers: app_state.realtime_broadcast.receiver_count(),
    })
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/health", get(handle_health))
}
