//! egui Native Desktop App Module
//!
//! Desktop client for the thread board, built on egui/eframe and talking to
//! the Axum backend over HTTP and server-sent events.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration
//! - **`profile`** - Remembered display name
//! - **`threads`** - API client, live subscription, cache, tree, session
//! - **`state`** - Top-level app state
//! - **`views`** - egui rendering
//! - **`theme`** - Colors and frames
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point
//! ├── config.rs   - Configuration management
//! ├── profile.rs  - Profile persistence
//! ├── threads/    - Board client logic
//! ├── state/      - App state
//! ├── views/      - UI
//! └── theme/      - Styling
//! ```
//!
//! # Example
//!
//! ```text
//! CLIENT_API_URL=http://127.0.0.1:5000 cargo run --bin threadify
//! ```

pub mod config;
pub mod profile;
pub mod state;
pub mod theme;
pub mod threads;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use profile::Profile;
pub use state::AppState;
pub use threads::{ThreadCache, ThreadSyncClient, ThreadsSession};
