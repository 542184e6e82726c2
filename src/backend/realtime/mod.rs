//! Real-time Update Module
//!
//! Pushes newly created posts to every connected client.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event broadcasting utilities
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Real-time System
//!
//! The real-time system uses Server-Sent Events (SSE) for one-way
//! communication from server to client. Every post created through
//! `POST /threads` is emitted as a `new-thread` event.
//!
//! # Known gap
//!
//! Delivery is best-effort. A client that is not subscribed when a post is
//! emitted never receives that event, and a subscriber that falls more than
//! the channel capacity behind skips events. Clients recover by re-reading
//! `GET /threads` whenever they (re)connect.

/// Event broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, RealtimeEventBroadcast};
pub use subscription::handle_realtime_subscription;
