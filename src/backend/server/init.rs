/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Create the broadcast channel
 * 2. Select the post store (PostgreSQL when configured and reachable)
 * 3. Build the post service and application state
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::realtime::broadcast::channel;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::threads::db::PgPostStore;
use crate::backend::threads::{PostService, PostStore};

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    let state = build_state(config).await;
    create_router(state)
}

/// Build the application state for `config`
///
/// A missing or unreachable database is not fatal: the server logs it and
/// keeps posts in memory.
pub async fn build_state(config: &ServerConfig) -> AppState {
    tracing::info!("Initializing Threadify backend server");

    let realtime_broadcast = channel(config.broadcast_capacity);

    let store = match &config.database_url {
        Some(url) => match load_database(url).await {
            Some(pool) => PostStore::Postgres(PgPostStore::new(pool)),
            None => PostStore::memory(),
        },
        None => {
            tracing::warn!("DATABASE_URL not set. Posts will be kept in memory only.");
            PostStore::memory()
        }
    };

    tracing::info!(
        "Post store: {}, broadcast capacity: {}, parent policy: {:?}",
        store.kind(),
        config.broadcast_capacity,
        config.parent_policy
    );

    AppState::new(PostService::new(store, realtime_broadcast, config.parent_policy))
}
