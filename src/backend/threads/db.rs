/**
 * Database Operations for Posts
 *
 * This module persists posts to the PostgreSQL `threads` table. Insertion
 * order is tracked by the `seq` BIGSERIAL column so `select_all` returns
 * posts in exactly the order they were accepted.
 *
 * Inserts are serialized through a process-local mutex: the id and
 * `created_at` of a post are assigned while holding it, so `created_at`
 * never decreases between consecutive accepted posts.
 */

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::threads::store::next_created_at;
use crate::shared::{NewPost, Post};

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: Option<String>,
    text: String,
    image_url: Option<String>,
    user_name: Option<String>,
    parent_id: Option<Uuid>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            text: row.text,
            image_url: row.image_url,
            author_name: row.user_name,
            parent_id: row.parent_id,
            tags: row.tags,
            created_at: row.created_at,
        }
    }
}

fn unavailable(err: sqlx::Error) -> BackendError {
    tracing::error!("[Threads] Database operation failed: {:?}", err);
    BackendError::store_unavailable(err.to_string())
}

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
    write_lock: Arc<Mutex<()>>,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Save a new post
    ///
    /// # Returns
    /// The stored post, or `StoreUnavailable` if the database rejects the write
    pub async fn insert(&self, new_post: NewPost) -> Result<Post, BackendError> {
        let _guard = self.write_lock.lock().await;

        let last: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(created_at) FROM threads")
                .fetch_one(&self.pool)
                .await
                .map_err(unavailable)?;
        let post = new_post.into_post(Uuid::new_v4(), next_created_at(last));

        sqlx::query(
            r#"
            INSERT INTO threads (id, title, text, image_url, user_name, parent_id, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.text)
        .bind(&post.image_url)
        .bind(&post.author_name)
        .bind(post.parent_id)
        .bind(&post.tags)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(post)
    }

    /// Load all posts ordered by insertion
    pub async fn select_all(&self) -> Result<Vec<Post>, BackendError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, text, image_url, user_name, parent_id, tags, created_at
            FROM threads
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    pub async fn contains(&self, id: Uuid) -> Result<bool, BackendError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM threads WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(unavailable)
    }
}
