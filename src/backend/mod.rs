//! Backend Module
//!
//! All server-side code: an Axum HTTP server that stores posts and pushes
//! every new post to connected clients.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and middleware
//! - **`threads`** - Post store, post service, `/threads` handlers
//! - **`realtime`** - Broadcast channel and the SSE `/realtime` stream
//! - **`error`** - Backend error types and HTTP mapping
//!
//! # Data Flow
//!
//! `POST /threads` → `PostService::create_post` → `PostStore::insert` →
//! `broadcast_event` → every open `/realtime` stream.
//!
//! # Thread Safety
//!
//! - The memory store is `Arc<RwLock<..>>`; inserts hold the write guard
//! - The PostgreSQL store serializes inserts through a mutex
//! - `broadcast::Sender` is cloned into every handler that needs it

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Post storage and creation
pub mod threads;

/// Real-time update system
pub mod realtime;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::{broadcast_event, handle_realtime_subscription, RealtimeEventBroadcast};
pub use server::{create_app, ServerConfig};
pub use threads::{ParentPolicy, PostService, PostStore};
