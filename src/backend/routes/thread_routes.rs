/**
 * Thread Routes
 *
 * - `GET /threads` - list every post
 * - `POST /threads` - create a root post or a reply
 * - `GET /realtime` - SSE stream of `new-thread` events
 */

use axum::{routing::get, Router};

use crate::backend::realtime::subscription::handle_realtime_subscription;
use crate::backend::server::state::AppState;
use crate::backend::threads::handlers::{create_thread, list_threads};

/// Configure thread and real-time routes
pub fn configure_thread_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/threads", get(list_threads).post(create_thread))
        .route("/realtime", get(handle_realtime_subscription))
}
