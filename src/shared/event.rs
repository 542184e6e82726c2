/**
 * Real-time Event System
 *
 * This module defines the event envelope pushed to connected clients over
 * the `/realtime` stream. The board emits a single kind of event today,
 * `new-thread`, carrying the freshly created post.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::post::Post;

/// SSE event name used for newly created posts
pub const NEW_THREAD_EVENT: &str = "new-thread";

/// Type of real-time event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// A post (root or reply) was created
    NewThread,
}

impl EventType {
    /// Name used for the SSE `event:` field
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::NewThread => NEW_THREAD_EVENT,
        }
    }
}

/// Real-time event that is broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeEvent {
    /// Type of event
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// RFC3339 timestamp of emission
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new real-time event
    pub fn new(event_type: EventType, payload: serde_json::Value) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a `new-thread` event from a persisted post
    pub fn new_thread(post: &Post) -> Result<Self, SharedError> {
        let payload = serde_json::to_value(post)?;
        Ok(Self::new(EventType::NewThread, payload))
    }

    /// Decode the payload of a `new-thread` event
    pub fn post(&self) -> Result<Post, SharedError> {
        match self.event_type {
            EventType::NewThread => Ok(serde_json::from_value(self.payload.clone())?),
        }
    }
}
