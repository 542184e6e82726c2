/**
 * Post Service
 *
 * The post service is the only writer of the post store. `create_post`
 * validates the input, persists it and then publishes it on the broadcast
 * channel; `list_posts` returns the full store contents.
 *
 * # Ordering of side effects
 *
 * 1. Validate (`text` required, length limits, parent policy)
 * 2. Insert into the store (assigns `id` and `createdAt`)
 * 3. Broadcast a `new-thread` event
 *
 * A failure in step 1 or 2 returns early, so nothing is ever broadcast for a
 * post that was not persisted.
 */

use std::str::FromStr;

use crate::backend::error::BackendError;
use crate::backend::realtime::{broadcast_event, RealtimeEventBroadcast};
use crate::backend::threads::store::PostStore;
use crate::shared::{ConfigError, NewPost, Post, RealtimeEvent};

/// How replies to unknown parents are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentPolicy {
    /// Reject a reply whose parent is not in the store
    #[default]
    RequireExisting,
    /// Accept any parent id; clients hide the reply until the parent is known
    AllowDangling,
}

impl FromStr for ParentPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "require-existing" | "strict" => Ok(Self::RequireExisting),
            "allow-dangling" | "lenient" => Ok(Self::AllowDangling),
            other => Err(ConfigError::InvalidValue {
                name: "PARENT_POLICY",
                value: other.to_string(),
            }),
        }
    }
}

/// Validates, persists and broadcasts posts
#[derive(Clone)]
pub struct PostService {
    store: PostStore,
    broadcast: RealtimeEventBroadcast,
    parent_policy: ParentPolicy,
}

impl PostService {
    pub fn new(store: PostStore, broadcast: RealtimeEventBroadcast, parent_policy: ParentPolicy) -> Self {
        Self {
            store,
            broadcast,
            parent_policy,
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn broadcast(&self) -> &RealtimeEventBroadcast {
        &self.broadcast
    }

    /// Create a post and publish it to every connected session
    ///
    /// # Errors
    ///
    /// * `SharedError::ValidationError` - empty text, limits exceeded, or an
    ///   unknown parent under `ParentPolicy::RequireExisting`
    /// * `StoreUnavailable` - the store rejected the write
    pub async fn create_post(&self, input: NewPost) -> Result<Post, BackendError> {
        input.validate()?;
        let input = input.normalized();

        if let (Some(parent_id), ParentPolicy::RequireExisting) = (input.parent_id, self.parent_policy) {
            if !self.store.contains(parent_id).await? {
                tracing::warn!("[Threads] Rejected reply to unknown parent {}", parent_id);
                return Err(BackendError::validation(
                    "parentId",
                    format!("Parent post {} does not exist", parent_id),
                ));
            }
        }

        let post = self.store.insert(input).await?;
        tracing::info!(
            "[Threads] Created {} {} by {}",
            if post.is_root() { "thread" } else { "reply" },
            post.id,
            post.author_display()
        );

        match RealtimeEvent::new_thread(&post) {
            Ok(event) => {
                broadcast_event(&self.broadcast, event);
            }
            Err(e) => {
                // The post is persisted; clients will see it on their next fetch.
                tracing::error!("[Threads] Failed to build event for {}: {}", post.id, e);
            }
        }

        Ok(post)
    }

    /// Every post in the store, in insertion order
    pub async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        let posts = self.store.select_all().await?;
        tracing::debug!("[Threads] Listing {} posts", posts.len());
        Ok(posts)
    }
}
