/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) handler for the
 * `/realtime` endpoint. Each connection gets its own broadcast receiver, so
 * a slow or disconnected session only affects itself.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged events are logged and skipped; the connection stays open
 * - Dropping the response stream drops the receiver (unsubscribe)
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;

/// Handle real-time subscription (GET /realtime)
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: new-thread
/// data: {"eventType":"new-thread","payload":{...},"timestamp":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(broadcast_tx): State<RealtimeEventBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let broadcast_rx = broadcast_tx.subscribe();
    tracing::info!(
        "[Realtime] Subscription opened ({} active)",
        broadcast_tx.receiver_count()
    );

    // Only yield when there is an event to send; keep-alive comments cover
    // the idle periods.
    let stream = stream::unfold(broadcast_rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };

                    tracing::debug!("[Realtime] Sending {} to subscriber", event.event_type.as_str());
                    let sse_event = Event::default()
                        .event(event.event_type.as_str())
                        .data(data);

                    return Some((Ok(sse_event), rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::info!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
