//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration and database loading
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use threadify::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::default();
//! let app = create_app(&config).await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{build_state, create_app};
pub use state::AppState;
