/**
 * Thread Handlers
 *
 * Axum handlers for the thread REST surface:
 *
 * - `GET /threads` - every post, in store order
 * - `POST /threads` - create a root post or a reply
 *
 * # Example Request
 *
 * ```http
 * POST /threads HTTP/1.1
 * Content-Type: application/json
 *
 * {"title":"Hi","text":"Hello world","userName":"Alice"}
 * ```
 *
 * # Example Response
 *
 * ```http
 * HTTP/1.1 201 Created
 * Content-Type: application/json
 *
 * {"id":"...","title":"Hi","text":"Hello world","imageUrl":null,
 *  "userName":"Alice","parentId":null,"tags":[],"createdAt":"..."}
 * ```
 */

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::threads::service::PostService;
use crate::shared::{NewPost, Post};

/// Handle `GET /threads`
pub async fn list_threads(
    State(service): State<PostService>,
) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = service.list_posts().await?;
    Ok(Json(posts))
}

/// Handle `POST /threads`
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON or validation failure
/// * `503 Service Unavailable` - the post store could not be written
pub async fn create_thread(
    State(service): State<PostService>,
    body: Bytes,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let input: NewPost = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("[Threads] Failed to parse post from request body: {}", e);
        BackendError::handler(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
    })?;

    let post = service.create_post(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
