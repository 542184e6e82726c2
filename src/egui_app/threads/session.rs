//! Board session state
//!
//! Everything one signed-in board view owns: the thread cache, the live
//! subscription, composer and reply drafts, and the per-post view state.
//! Background work reports through channels drained by [`ThreadsSession::poll`]
//! once per frame.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::egui_app::threads::api::{spawn_request, ClientError, ThreadsApi};
use crate::egui_app::threads::cache::ThreadCache;
use crate::egui_app::threads::sync::{SubscriptionStatus, SyncEvent, ThreadSyncClient};
use crate::egui_app::threads::tree::{build_tree, ThreadTree};
use crate::shared::{NewPost, Post};

type PendingFetch = Receiver<Result<Vec<Post>, ClientError>>;
type PendingCreate = Receiver<Result<Post, ClientError>>;

/// Where a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeTarget {
    Root,
    Reply(Uuid),
}

/// New root thread form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub title: String,
    pub text: String,
    pub image_url: String,
    /// Comma-separated
    pub tags: String,
}

impl Composer {
    fn to_new_post(&self, author: &str) -> NewPost {
        let mut input = NewPost::root(self.title.trim(), self.text.clone()).with_author(author);
        if !self.image_url.trim().is_empty() {
            input = input.with_image(self.image_url.trim());
        }
        for tag in self.tags.split(',') {
            if !tag.trim().is_empty() {
                input = input.with_tag(tag.trim());
            }
        }
        input
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State of one board session
pub struct ThreadsSession {
    user_name: String,
    api: ThreadsApi,
    sync: ThreadSyncClient,
    cache: ThreadCache,
    tree: Arc<ThreadTree>,
    tree_revision: Option<u64>,
    status: SubscriptionStatus,

    pub composer: Composer,
    composer_error: Option<String>,
    reply_drafts: HashMap<Uuid, String>,
    reply_errors: HashMap<Uuid, String>,
    open_replies: HashSet<Uuid>,
    expanded: HashSet<Uuid>,
    retryable: HashSet<ComposeTarget>,

    fetch_error: Option<String>,
    pending_fetch: Option<PendingFetch>,
    pending_creates: Vec<(ComposeTarget, PendingCreate)>,
}

impl ThreadsSession {
    /// Create a session without touching the network
    pub fn new(config: Config, user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            api: ThreadsApi::new(config.clone()),
            sync: ThreadSyncClient::new(config),
            cache: ThreadCache::new(),
            tree: Arc::new(ThreadTree::default()),
            tree_revision: None,
            status: SubscriptionStatus::Disconnected,
            composer: Composer::default(),
            composer_error: None,
            reply_drafts: HashMap::new(),
            reply_errors: HashMap::new(),
            open_replies: HashSet::new(),
            expanded: HashSet::new(),
            retryable: HashSet::new(),
            fetch_error: None,
            pending_fetch: None,
            pending_creates: Vec::new(),
        }
    }

    /// Create a session and open the live subscription.
    ///
    /// The snapshot is fetched once the subscription reports `Connected`,
    /// so no post created in between is missed.
    pub fn start(config: Config, user_name: impl Into<String>) -> Self {
        let mut session = Self::new(config, user_name);
        tracing::info!("[Threads] Starting session for {}", session.user_name);
        session.sync.subscribe();
        session
    }

    /// Tear down the subscription and forget everything cached
    pub fn end(&mut self) {
        tracing::info!("[Threads] Ending session for {}", self.user_name);
        self.sync.unsubscribe();
        self.cache.clear();
        self.pending_fetch = None;
        self.pending_creates.clear();
        self.reply_drafts.clear();
        self.reply_errors.clear();
        self.open_replies.clear();
        self.expanded.clear();
        self.retryable.clear();
        self.status = SubscriptionStatus::Disconnected;
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn status(&self) -> &SubscriptionStatus {
        &self.status
    }

    pub fn cache(&self) -> &ThreadCache {
        &self.cache
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn composer_error(&self) -> Option<&str> {
        self.composer_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some()
    }

    pub fn is_submitting(&self, target: ComposeTarget) -> bool {
        self.pending_creates.iter().any(|(t, _)| *t == target)
    }

    /// Current tree, rebuilt only when the cache changed
    pub fn tree(&mut self) -> Arc<ThreadTree> {
        let revision = self.cache.revision();
        if self.tree_revision != Some(revision) {
            self.tree = Arc::new(build_tree(self.cache.posts()));
            self.tree_revision = Some(revision);
        }
        Arc::clone(&self.tree)
    }

    /// Drain background results. Call once per frame.
    pub fn poll(&mut self) {
        for event in self.sync.poll_events() {
            self.handle_sync_event(event);
        }

        if let Some(rx) = &self.pending_fetch {
            let result = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => Some(Err(
                    ClientError::Network("request worker stopped".to_string()),
                )),
            };
            if let Some(result) = result {
                self.pending_fetch = None;
                self.handle_snapshot(result);
            }
        }

        let mut finished = Vec::new();
        self.pending_creates.retain(|(target, rx)| match rx.try_recv() {
            Ok(result) => {
                finished.push((*target, result));
                false
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => true,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                finished.push((
                    *target,
                    Err(ClientError::Network("request worker stopped".to_string())),
                ));
                false
            }
        });
        for (target, result) in finished {
            self.handle_created(target, result);
        }
    }

    pub fn handle_sync_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::Post(post) => {
                self.cache.apply(post);
            }
            SyncEvent::Status(status) => {
                if status == SubscriptionStatus::Connected {
                    self.request_snapshot();
                }
                self.status = status;
            }
        }
    }

    /// Fetch `GET /threads` in the background and re-seed the cache
    ///
    /// Replaces any fetch still in flight; its result is dropped unread, since
    /// it may predate posts missed while the subscription was down.
    pub fn request_snapshot(&mut self) {
        let api = self.api.clone();
        self.pending_fetch = Some(spawn_request(move || async move { api.fetch_threads().await }));
    }

    pub fn handle_snapshot(&mut self, result: Result<Vec<Post>, ClientError>) {
        match result {
            Ok(posts) => {
                tracing::info!("[Threads] Loaded {} post(s)", posts.len());
                self.cache.seed(posts);
                self.fetch_error = None;
            }
            Err(e) => {
                tracing::warn!("[Threads] Failed to load threads: {}", e);
                self.fetch_error = Some(e.to_string());
            }
        }
    }

    /// Submit the composer as a new root thread
    pub fn submit_root(&mut self) {
        if self.is_submitting(ComposeTarget::Root) {
            return;
        }
        if self.composer.title.trim().is_empty() {
            self.composer_error = Some("A new thread needs a title".to_string());
            self.retryable.remove(&ComposeTarget::Root);
            return;
        }
        let input = self.composer.to_new_post(&self.user_name);
        if let Err(e) = input.validate() {
            self.composer_error = Some(e.to_string());
            self.retryable.remove(&ComposeTarget::Root);
            return;
        }
        self.composer_error = None;
        self.spawn_create(ComposeTarget::Root, input);
    }

    /// Submit the reply draft for `parent_id`
    pub fn submit_reply(&mut self, parent_id: Uuid) {
        let target = ComposeTarget::Reply(parent_id);
        if self.is_submitting(target) {
            return;
        }
        let text = self.reply_drafts.get(&parent_id).cloned().unwrap_or_default();
        let input = NewPost::reply(parent_id, text).with_author(self.user_name.as_str());
        if let Err(e) = input.validate() {
            self.reply_errors.insert(parent_id, e.to_string());
            self.retryable.remove(&target);
            return;
        }
        self.reply_errors.remove(&parent_id);
        self.spawn_create(target, input);
    }

    fn spawn_create(&mut self, target: ComposeTarget, input: NewPost) {
        let api = self.api.clone();
        let rx = spawn_request(move || async move { api.create_thread(&input).await });
        self.pending_creates.push((target, rx));
    }

    /// Apply the result of a submission.
    ///
    /// The created post goes straight into the cache; its broadcast echo is
    /// then a duplicate and ignored. Failures keep the draft.
    pub fn handle_created(&mut self, target: ComposeTarget, result: Result<Post, ClientError>) {
        match &result {
            Err(e) if e.is_retryable() => self.retryable.insert(target),
            _ => self.retryable.remove(&target),
        };
        match (target, result) {
            (ComposeTarget::Root, Ok(post)) => {
                tracing::info!("[Threads] Created thread {}", post.id);
                self.cache.apply(post);
                self.composer.clear();
                self.composer_error = None;
            }
            (ComposeTarget::Reply(parent_id), Ok(post)) => {
                tracing::info!("[Threads] Created reply {} to {}", post.id, parent_id);
                self.cache.apply(post);
                self.reply_drafts.remove(&parent_id);
                self.reply_errors.remove(&parent_id);
                self.open_replies.remove(&parent_id);
            }
            (ComposeTarget::Root, Err(e)) => {
                tracing::warn!("[Threads] Failed to create thread: {}", e);
                self.composer_error = Some(e.to_string());
            }
            (ComposeTarget::Reply(parent_id), Err(e)) => {
                tracing::warn!("[Threads] Failed to reply to {}: {}", parent_id, e);
                self.reply_errors.insert(parent_id, e.to_string());
            }
        }
    }

    /// Whether the last failure for `target` may succeed if sent unchanged
    pub fn can_retry(&self, target: ComposeTarget) -> bool {
        self.retryable.contains(&target)
    }

    pub fn reply_draft_mut(&mut self, parent_id: Uuid) -> &mut String {
        self.reply_drafts.entry(parent_id).or_default()
    }

    pub fn reply_error(&self, parent_id: &Uuid) -> Option<&str> {
        self.reply_errors.get(parent_id).map(String::as_str)
    }

    pub fn is_reply_open(&self, id: &Uuid) -> bool {
        self.open_replies.contains(id)
    }

    pub fn toggle_reply(&mut self, id: Uuid) {
        if !self.open_replies.remove(&id) {
            self.open_replies.insert(id);
        }
    }

    pub fn is_expanded(&self, id: &Uuid) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: Uuid) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}
