//! End-to-end tests: desktop client against a real server socket
//!
//! The subscription and session run on their own threads exactly as in the
//! app; the test polls them the way the UI does every frame.

#![cfg(feature = "ssr")]

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use threadify::egui_app::threads::{
    ComposeTarget, SubscriptionStatus, SyncEvent, ThreadSyncClient, ThreadsApi, ThreadsSession,
};
use threadify::shared::{NewPost, Post};
use uuid::Uuid;

use common::server::{client_config, spawn_server};
use common::wait_for;

const LIMIT: Duration = Duration::from_secs(10);

/// Collect posts from `client`, returning once it reports `Connected`
async fn wait_connected(client: &ThreadSyncClient, received: &mut Vec<Post>) -> bool {
    wait_for(LIMIT, || {
        let mut connected = false;
        for event in client.poll_events() {
            match event {
                SyncEvent::Status(SubscriptionStatus::Connected) => connected = true,
                SyncEvent::Post(post) => received.push(post),
                SyncEvent::Status(_) => {}
            }
        }
        connected.then_some(())
    })
    .await
    .is_some()
}

fn drain_posts(client: &ThreadSyncClient, received: &mut Vec<Post>) {
    for event in client.poll_events() {
        if let SyncEvent::Post(post) = event {
            received.push(post);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_both_sessions_receive_post_once() {
    let addr = spawn_server().await;
    let config = client_config(addr);

    let mut one = ThreadSyncClient::new(config.clone());
    let mut two = ThreadSyncClient::new(config.clone());
    one.subscribe();
    two.subscribe();

    let mut seen_one = Vec::new();
    let mut seen_two = Vec::new();
    assert!(wait_connected(&one, &mut seen_one).await);
    assert!(wait_connected(&two, &mut seen_two).await);

    let api = ThreadsApi::new(config);
    let created = api
        .create_thread(&NewPost::root("Hello", "World").with_author("Ada"))
        .await
        .unwrap();

    let arrived = wait_for(LIMIT, || {
        drain_posts(&one, &mut seen_one);
        drain_posts(&two, &mut seen_two);
        (!seen_one.is_empty() && !seen_two.is_empty()).then_some(())
    })
    .await;
    assert!(arrived.is_some(), "post was not delivered to both sessions");

    // Give any duplicate delivery time to show up.
    tokio::time::sleep(Duration::from_millis(200)).await;
    drain_posts(&one, &mut seen_one);
    drain_posts(&two, &mut seen_two);

    assert_eq!(seen_one, vec![created.clone()]);
    assert_eq!(seen_two, vec![created]);

    one.unsubscribe();
    two.unsubscribe();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_session_seeds_then_follows_live_posts() {
    let addr = spawn_server().await;
    let config = client_config(addr);
    let api = ThreadsApi::new(config.clone());

    let existing = api
        .create_thread(&NewPost::root("Before", "created before connect"))
        .await
        .unwrap();

    let mut session = ThreadsSession::start(config, "Bo");

    let seeded = wait_for(LIMIT, || {
        session.poll();
        (session.cache().contains(&existing.id) && !session.is_loading()).then_some(())
    })
    .await;
    assert!(seeded.is_some(), "snapshot was not loaded");
    assert_eq!(session.status(), &SubscriptionStatus::Connected);

    let reply = api
        .create_thread(&NewPost::reply(existing.id, "live reply").with_author("Ada"))
        .await
        .unwrap();

    let applied = wait_for(LIMIT, || {
        session.poll();
        session.cache().contains(&reply.id).then_some(())
    })
    .await;
    assert!(applied.is_some(), "live reply was not applied");

    let tree = session.tree();
    assert_eq!(tree.roots().len(), 1);
    assert_eq!(tree.replies_of(&existing.id)[0].post, reply);

    session.end();
    assert!(session.cache().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_own_reply_appears_once() {
    let addr = spawn_server().await;
    let config = client_config(addr);
    let api = ThreadsApi::new(config.clone());
    let root = api.create_thread(&NewPost::root("Root", "text")).await.unwrap();

    let mut session = ThreadsSession::start(config, "Ada");
    assert!(wait_for(LIMIT, || {
        session.poll();
        session.cache().contains(&root.id).then_some(())
    })
    .await
    .is_some());

    session.toggle_reply(root.id);
    *session.reply_draft_mut(root.id) = "my reply".to_string();
    session.submit_reply(root.id);

    let done = wait_for(LIMIT, || {
        session.poll();
        (!session.is_submitting(ComposeTarget::Reply(root.id))).then_some(())
    })
    .await;
    assert!(done.is_some());

    // Let the broadcast echo arrive.
    tokio::time::sleep(Duration::from_millis(300)).await;
    session.poll();

    let replies: Vec<Uuid> = session
        .cache()
        .posts()
        .iter()
        .filter(|p| p.parent_id == Some(root.id))
        .map(|p| p.id)
        .collect();
    assert_eq!(replies.len(), 1);
    assert!(!session.is_reply_open(&root.id));
}
