//! Threads Backend Module
//!
//! Server-side post handling: the post store, the post service and the HTTP
//! handlers for `/threads`.
//!
//! # Architecture
//!
//! - **`store`** - `PostStore` (memory or PostgreSQL backend)
//! - **`db`** - PostgreSQL persistence for posts
//! - **`service`** - `PostService`: validation, persistence, broadcast
//! - **`handlers`** - `GET /threads` and `POST /threads`
//!
//! # Example
//!
//! ```rust,no_run
//! use threadify::backend::realtime::broadcast::channel;
//! use threadify::backend::threads::{ParentPolicy, PostService, PostStore};
//! use threadify::shared::NewPost;
//!
//! # async fn example() -> Result<(), threadify::backend::BackendError> {
//! let service = PostService::new(PostStore::memory(), channel(1000), ParentPolicy::default());
//! let post = service.create_post(NewPost::root("Hi", "Hello world")).await?;
//! # Ok(())
//! # }
//! ```

/// Post store backends
pub mod store;

/// Database operations for posts
pub mod db;

/// Post creation and listing
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_thread, list_threads};
pub use service::{ParentPolicy, PostService};
pub use store::{MemoryPostStore, PostStore};
