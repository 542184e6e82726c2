//! Session thread cache
//!
//! Flat, append-only mirror of every post the session knows about. Seeded
//! from `GET /threads` and extended by live `new-thread` events.

use std::collections::HashSet;

use uuid::Uuid;

use crate::shared::Post;

/// Client-held post collection for one session
#[derive(Debug, Default)]
pub struct ThreadCache {
    posts: Vec<Post>,
    ids: HashSet<Uuid>,
    revision: u64,
}

impl ThreadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a server snapshot.
    ///
    /// Posts already received live but missing from the snapshot are kept
    /// after it, in the order they arrived.
    pub fn seed(&mut self, snapshot: Vec<Post>) {
        let previous = std::mem::take(&mut self.posts);
        self.ids.clear();

        for post in snapshot.into_iter().chain(previous) {
            if self.ids.insert(post.id) {
                self.posts.push(post);
            }
        }
        self.revision += 1;
    }

    /// Append a post. Returns `false` if the id is already cached.
    pub fn apply(&mut self, post: Post) -> bool {
        if !self.ids.insert(post.id) {
            tracing::debug!("[Threads] Ignoring duplicate post {}", post.id);
            return false;
        }
        self.posts.push(post);
        self.revision += 1;
        true
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Monotonic change counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clear(&mut self) {
        self.posts.clear();
        self.ids.clear();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NewPost;
    use chrono::Utc;

    fn post(text: &str) -> Post {
        NewPost::root("t", text).into_post(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_apply_appends_in_order() {
        let mut cache = ThreadCache::new();
        let a = post("a");
        let b = post("b");
        assert!(cache.apply(a.clone()));
        assert!(cache.apply(b.clone()));
        assert_eq!(cache.posts(), &[a, b]);
    }

    #[test]
    fn test_duplicate_apply_is_noop() {
        let mut cache = ThreadCache::new();
        let a = post("a");
        cache.apply(a.clone());
        let revision = cache.revision();

        assert!(!cache.apply(a));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.revision(), revision);
    }

    #[test]
    fn test_seed_keeps_live_posts_missing_from_snapshot() {
        let mut cache = ThreadCache::new();
        let early = post("early");
        let live = post("live");
        cache.apply(live.clone());

        cache.seed(vec![early.clone(), live.clone()]);
        assert_eq!(cache.posts(), &[early.clone(), live.clone()]);

        let late = post("late");
        cache.apply(late.clone());
        cache.seed(vec![early.clone()]);
        assert_eq!(cache.posts(), &[early, live, late]);
    }

    #[test]
    fn test_clear_bumps_revision() {
        let mut cache = ThreadCache::new();
        cache.apply(post("a"));
        let revision = cache.revision();
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.revision() > revision);
    }
}
