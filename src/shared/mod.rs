//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the server. All types are designed for
//! serialization and transmission over HTTP.

/// Post data structure
pub mod post;

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use post::{NewPost, Post};
pub use event::{EventType, RealtimeEvent, NEW_THREAD_EVENT};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
