//! Live thread subscription
//!
//! Holds a `GET /realtime` server-sent event stream open on a background
//! thread and forwards every `new-thread` post to the UI over an `mpsc`
//! channel. Transport errors and stream ends reconnect with exponential
//! backoff; `unsubscribe` (or drop) stops the thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::watch;

use crate::egui_app::config::Config;
use crate::shared::{Post, RealtimeEvent, NEW_THREAD_EVENT};

const INITIAL_RECONNECT_DELAY: Duration = Duration::from_millis(1000);
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(30);

/// Subscription status reported by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

/// Messages from the subscription thread
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    Status(SubscriptionStatus),
    Post(Post),
}

/// Session-scoped subscription to `/realtime`
#[derive(Debug)]
pub struct ThreadSyncClient {
    config: Config,
    shutdown: Option<watch::Sender<bool>>,
    events: Option<Receiver<SyncEvent>>,
    subscription_thread: Option<thread::JoinHandle<()>>,
}

impl ThreadSyncClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: None,
            events: None,
            subscription_thread: None,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.shutdown.is_some()
    }

    /// Open the stream. No-op when already subscribed.
    pub fn subscribe(&mut self) {
        if self.is_subscribed() {
            return;
        }

        let (event_tx, event_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let config = self.config.clone();

        let handle = thread::spawn(move || {
            run_subscription(config, event_tx, shutdown_rx);
        });

        self.shutdown = Some(shutdown_tx);
        self.events = Some(event_rx);
        self.subscription_thread = Some(handle);
    }

    /// Stop the stream and drop anything not yet polled
    pub fn unsubscribe(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(true);
            tracing::info!("[Sync] Unsubscribed from {}", self.config.api_url("/realtime"));
        }
        self.events = None;
        // The thread observes the shutdown signal at its next await point.
        self.subscription_thread = None;
    }

    /// Drain pending events (non-blocking)
    pub fn poll_events(&self) -> Vec<SyncEvent> {
        match &self.events {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Drop for ThreadSyncClient {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// One parsed server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseMessage {
    pub event: String,
    pub data: String,
}

/// Incremental `text/event-stream` parser.
///
/// Accepts arbitrary byte chunks; a message is emitted on the blank line
/// that terminates it. Comment lines (keep-alives) are skipped.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseMessage> {
        self.buffer.extend_from_slice(chunk);
        let mut messages = Vec::new();

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.is_empty() {
                if let Some(message) = self.dispatch() {
                    messages.push(message);
                }
                continue;
            }
            if line.starts_with(':') {
                continue;
            }

            let (field, value) = match line.split_once(':') {
                Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                None => (line, ""),
            };
            match field {
                "event" => self.event = Some(value.to_string()),
                "data" => self.data.push(value.to_string()),
                _ => {}
            }
        }

        messages
    }

    fn dispatch(&mut self) -> Option<SseMessage> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseMessage {
            event: event.unwrap_or_else(|| "message".to_string()),
            data,
        })
    }
}

/// Extract the post from a `new-thread` message
pub fn decode_post(message: &SseMessage) -> Option<Post> {
    if message.event != NEW_THREAD_EVENT {
        tracing::debug!("[Sync] Ignoring '{}' event", message.event);
        return None;
    }
    match serde_json::from_str::<RealtimeEvent>(&message.data)
        .map_err(|e| e.to_string())
        .and_then(|event| event.post().map_err(|e| e.to_string()))
    {
        Ok(post) => Some(post),
        Err(e) => {
            tracing::warn!("[Sync] Failed to decode new-thread event: {}", e);
            None
        }
    }
}

fn next_delay(delay: Duration) -> Duration {
    std::cmp::min(delay * 2, MAX_RECONNECT_DELAY)
}

/// Why a connection attempt ended
enum StreamEnd {
    Shutdown,
    Closed,
    Failed(String),
}

fn run_subscription(config: Config, events: Sender<SyncEvent>, shutdown: watch::Receiver<bool>) {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("[Sync] Failed to create runtime for subscription: {}", e);
            let _ = events.send(SyncEvent::Status(SubscriptionStatus::Error(e.to_string())));
            return;
        }
    };

    rt.block_on(subscription_loop(config, events, shutdown));
}

async fn subscription_loop(
    config: Config,
    events: Sender<SyncEvent>,
    mut shutdown: watch::Receiver<bool>,
) {
    let client = Client::new();
    let url = config.api_url("/realtime");
    let mut reconnect_delay = INITIAL_RECONNECT_DELAY;

    loop {
        if *shutdown.borrow() {
            break;
        }

        tracing::info!("[Sync] Subscribing to {}", url);
        if events
            .send(SyncEvent::Status(SubscriptionStatus::Connecting))
            .is_err()
        {
            break;
        }

        let end = tokio::select! {
            end = read_stream(&client, &url, &events, &mut reconnect_delay) => end,
            _ = shutdown.changed() => StreamEnd::Shutdown,
        };

        let status = match end {
            StreamEnd::Shutdown => break,
            StreamEnd::Closed => {
                tracing::info!("[Sync] Stream closed by server, reconnecting");
                SubscriptionStatus::Disconnected
            }
            StreamEnd::Failed(reason) => {
                tracing::warn!("[Sync] Subscription failed (will retry): {}", reason);
                SubscriptionStatus::Error(reason)
            }
        };
        if events.send(SyncEvent::Status(status)).is_err()
            || events
                .send(SyncEvent::Status(SubscriptionStatus::Retrying))
                .is_err()
        {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(reconnect_delay) => {}
            _ = shutdown.changed() => break,
        }
        reconnect_delay = next_delay(reconnect_delay);
    }

    tracing::debug!("[Sync] Subscription thread exiting");
}

async fn read_stream(
    client: &Client,
    url: &str,
    events: &Sender<SyncEvent>,
    reconnect_delay: &mut Duration,
) -> StreamEnd {
    let response = match client
        .get(url)
        .header("Accept", "text/event-stream")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return StreamEnd::Failed(format!("network: {}", e)),
    };

    if !response.status().is_success() {
        return StreamEnd::Failed(format!("http: {}", response.status()));
    }

    tracing::info!("[Sync] Subscription established");
    if events
        .send(SyncEvent::Status(SubscriptionStatus::Connected))
        .is_err()
    {
        return StreamEnd::Shutdown;
    }
    *reconnect_delay = INITIAL_RECONNECT_DELAY;

    let mut parser = SseParser::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return StreamEnd::Failed(format!("stream: {}", e)),
        };
        for message in parser.push(&chunk) {
            if let Some(post) = decode_post(&message) {
                tracing::debug!("[Sync] Received post {}", post.id);
                if events.send(SyncEvent::Post(post)).is_err() {
                    return StreamEnd::Shutdown;
                }
            }
        }
    }

    StreamEnd::Closed
}
