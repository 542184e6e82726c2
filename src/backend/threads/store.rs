/**
 * Post Store
 *
 * The post store is the single source of truth for every post on the board.
 * It exposes three operations: `insert` (assigns identity and creation time),
 * `select_all` (insertion order) and `contains` (used by the parent policy).
 *
 * # Backends
 *
 * - `Memory` - process-local `Vec<Post>` behind a `tokio::sync::RwLock`;
 *   used when no database is configured and in tests
 * - `Postgres` - the `threads` table via sqlx (see `db.rs`)
 *
 * # Atomicity
 *
 * An insert assigns the id, clamps `created_at` so it never goes backwards
 * and appends, all under one write guard. Two concurrent inserts can never
 * observe the same "previous" timestamp.
 */

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::threads::db::PgPostStore;
use crate::shared::{NewPost, Post};

/// Post store backends
#[derive(Clone)]
pub enum PostStore {
    Memory(MemoryPostStore),
    Postgres(PgPostStore),
}

impl PostStore {
    /// Create an empty in-memory store
    pub fn memory() -> Self {
        Self::Memory(MemoryPostStore::new())
    }

    /// Short backend name, reported by `/health`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Persist a new post, assigning its id and creation time
    pub async fn insert(&self, new_post: NewPost) -> Result<Post, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.insert(new_post).await),
            Self::Postgres(store) => store.insert(new_post).await,
        }
    }

    /// All posts in insertion order
    pub async fn select_all(&self) -> Result<Vec<Post>, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.select_all().await),
            Self::Postgres(store) => store.select_all().await,
        }
    }

    /// Whether a post with this id exists
    pub async fn contains(&self, id: Uuid) -> Result<bool, BackendError> {
        match self {
            Self::Memory(store) => Ok(store.contains(id).await),
            Self::Postgres(store) => store.contains(id).await,
        }
    }
}

/// Next creation timestamp: now, unless the clock went backwards
///
/// Truncated to microseconds, the precision of a `TIMESTAMPTZ` column, so a
/// post reads back from either backend exactly as it was returned.
pub(crate) fn next_created_at(last: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now().trunc_subsecs(6);
    match last {
        Some(last) if last > now => last,
        _ => now,
    }
}

#[derive(Default)]
struct MemoryInner {
    posts: Vec<Post>,
    ids: HashSet<Uuid>,
}

/// In-memory post store
#[derive(Clone, Default)]
pub struct MemoryPostStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, new_post: NewPost) -> Post {
        let mut inner = self.inner.write().await;

        let mut id = Uuid::new_v4();
        while inner.ids.contains(&id) {
            id = Uuid::new_v4();
        }
        let created_at = next_created_at(inner.posts.last().map(|p| p.created_at));

        let post = new_post.into_post(id, created_at);
        inner.ids.insert(id);
        inner.posts.push(post.clone());
        post
    }

    pub async fn select_all(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.read().await.ids.contains(&id)
    }
}
