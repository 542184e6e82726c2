//! `/threads` API integration tests
//!
//! Exercises the HTTP surface through axum-test with the in-memory store.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use threadify::shared::Post;
use uuid::Uuid;

use common::server::{create_lenient_test_server, create_test_server};

#[tokio::test]
async fn test_list_threads_starts_empty() {
    let server = create_test_server().await;

    let response = server.get("/threads").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Post>>(), Vec::<Post>::new());
}

#[tokio::test]
async fn test_create_root_post_then_list() {
    let server = create_test_server().await;

    let response = server
        .post("/threads")
        .json(&json!({
            "title": "Hello",
            "text": "World",
            "userName": "Ada",
            "tags": ["intro"]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Post = response.json();
    assert_eq!(created.title.as_deref(), Some("Hello"));
    assert_eq!(created.text, "World");
    assert_eq!(created.author_name.as_deref(), Some("Ada"));
    assert_eq!(created.parent_id, None);
    assert_eq!(created.tags, vec!["intro".to_string()]);

    let listed: Vec<Post> = server.get("/threads").await.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_reply_references_parent() {
    let server = create_test_server().await;

    let parent: Post = server
        .post("/threads")
        .json(&json!({ "title": "Hello", "text": "World" }))
        .await
        .json();

    let response = server
        .post("/threads")
        .json(&json!({ "text": "Nice!", "parentId": parent.id }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let reply: Post = response.json();
    assert_eq!(reply.parent_id, Some(parent.id));
    assert_eq!(reply.title, None);

    let listed: Vec<Post> = server.get("/threads").await.json();
    let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![parent.id, reply.id]);
}

#[tokio::test]
async fn test_whitespace_text_is_rejected_and_not_stored() {
    let server = create_test_server().await;

    let response = server
        .post("/threads")
        .json(&json!({ "title": "Empty", "text": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("text"));

    let listed: Vec<Post> = server.get("/threads").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_missing_text_field_is_bad_request() {
    let server = create_test_server().await;

    let response = server
        .post("/threads")
        .json(&json!({ "title": "No body" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = create_test_server().await;

    let response = server
        .post("/threads")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_reply_to_unknown_parent_is_rejected_by_default() {
    let server = create_test_server().await;

    let response = server
        .post("/threads")
        .json(&json!({ "text": "Hello?", "parentId": Uuid::new_v4() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let listed: Vec<Post> = server.get("/threads").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_reply_to_unknown_parent_allowed_when_lenient() {
    let server = create_lenient_test_server().await;
    let missing = Uuid::new_v4();

    let response = server
        .post("/threads")
        .json(&json!({ "text": "Hello?", "parentId": missing }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Post>().parent_id, Some(missing));
}

#[tokio::test]
async fn test_created_posts_have_unique_ids_and_ordered_timestamps() {
    let server = create_test_server().await;

    for i in 0..10 {
        server
            .post("/threads")
            .json(&json!({ "title": format!("t{}", i), "text": format!("post {}", i) }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let listed: Vec<Post> = server.get("/threads").await.json();
    assert_eq!(listed.len(), 10);

    let mut ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    for pair in listed.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    let texts: Vec<&str> = listed.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts[0], "post 0");
    assert_eq!(texts[9], "post 9");
}

#[tokio::test]
async fn test_text_is_stored_as_submitted() {
    let server = create_test_server().await;
    let text = "  leading and trailing  \n";

    let created: Post = server
        .post("/threads")
        .json(&json!({ "title": "Spacing", "text": text, "imageUrl": "  " }))
        .await
        .json();

    assert_eq!(created.text, text);
    assert_eq!(created.image_url, None);
}

#[tokio::test]
async fn test_wire_format_uses_camel_case() {
    let server = create_test_server().await;

    let body: Value = server
        .post("/threads")
        .json(&json!({
            "title": "Pic",
            "text": "See image",
            "imageUrl": "https://example.com/cat.png",
            "userName": "Ada"
        }))
        .await
        .json();

    assert_eq!(body["imageUrl"], "https://example.com/cat.png");
    assert_eq!(body["userName"], "Ada");
    assert!(body["createdAt"].is_string());
    assert!(body.get("parentId").is_some());
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["subscribers"], 0);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server().await;

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}
