/**
 * Real-time Event Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Every subscriber connected at emission time
 * receives a copy of each event, in emission order.
 *
 * Delivery is fire-and-forget: there is no acknowledgment, retry or replay.
 * A session that subscribes after an event was sent never sees it and has to
 * rely on `GET /threads` to catch up.
 */

use tokio::sync::broadcast;

use crate::shared::RealtimeEvent;

/// Default number of buffered events per subscriber before it lags
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1000;

/// Real-time update event broadcast
///
/// Cloned into the application state so any handler can emit events.
///
/// # Usage
///
/// ```rust
/// use threadify::backend::realtime::RealtimeEventBroadcast;
/// use threadify::shared::RealtimeEvent;
/// use tokio::sync::broadcast;
///
/// let (tx, _) = broadcast::channel::<RealtimeEvent>(1000);
/// let broadcast: RealtimeEventBroadcast = tx;
/// ```
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Create a broadcast sender with the given per-subscriber capacity
pub fn channel(capacity: usize) -> RealtimeEventBroadcast {
    let (tx, _) = broadcast::channel(capacity.max(1));
    tx
}

/// Broadcast a real-time event to all subscribers
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: RealtimeEvent) -> usize {
    let event_name = event.event_type.as_str();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!(
                "[Realtime] {} event broadcast to {} subscribers",
                event_name,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive {} event", event_name);
            0
        }
    }
}
