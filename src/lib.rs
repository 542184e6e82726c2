//! Threadify - Main Library
//!
//! Threadify is a real-time threaded discussion board. Users post root
//! threads and nested replies; every new post appears live in every
//! connected client without polling.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and server
//!   - `Post` / `NewPost` and their validation rules
//!   - `RealtimeEvent` wire envelope
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server for `/threads`, `/realtime` and `/health`
//!   - Memory and PostgreSQL post stores
//!   - Broadcast fan-out over server-sent events
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session-scoped thread cache seeded from the server
//!   - Live subscription with reconnection
//!   - Recursive tree rendering with truncation and reply boxes
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum, sqlx). On by default.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use threadify::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin threadify
//! ```
//!
//! # Thread Safety
//!
//! - **Server**: post stores sit behind `Arc<RwLock<>>` / `Mutex`, fan-out
//!   goes through a single `broadcast::Sender`
//! - **Native**: egui runs single-threaded; network work happens on
//!   background threads that report back over `mpsc` channels

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
