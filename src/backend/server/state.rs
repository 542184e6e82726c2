/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * - `PostService` is cheap to clone; its store is behind `Arc`
 * - `broadcast::Sender` is thread-safe and can be cloned
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 */

use axum::extract::FromRef;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::backend::threads::PostService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Post service, the only writer of the post store
    pub posts: PostService,

    /// Broadcast channel for notifying all SSE subscribers of new posts
    pub realtime_broadcast: RealtimeEventBroadcast,
}

impl AppState {
    pub fn new(posts: PostService) -> Self {
        let realtime_broadcast = posts.broadcast().clone();
        Self {
            posts,
            realtime_broadcast,
        }
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}
