//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation and middleware
//! ├── thread_routes.rs - /threads and /realtime
//! └── api_routes.rs    - /health
//! ```

/// Main router creation
pub mod router;

/// Thread and real-time routes
pub mod thread_routes;

/// Operational endpoints
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
