//! Thread board client
//!
//! - **`api`** - `GET`/`POST /threads` over reqwest
//! - **`sync`** - `/realtime` subscription with reconnection
//! - **`cache`** - session-scoped post collection
//! - **`tree`** - reply tree reconstruction and text truncation
//! - **`session`** - per-session state driving the views

pub mod api;
pub mod cache;
pub mod session;
pub mod sync;
pub mod tree;

pub use api::{ClientError, ThreadsApi};
pub use cache::ThreadCache;
pub use session::{ComposeTarget, Composer, ThreadsSession};
pub use sync::{SubscriptionStatus, SyncEvent, ThreadSyncClient};
pub use tree::{build_tree, display_text, ThreadRow, ThreadTree, MAX_TEXT_LENGTH};
