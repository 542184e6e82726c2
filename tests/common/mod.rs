//! Common test utilities and helpers
//!
//! - In-process servers (mock transport and real TCP)
//! - Post fixtures
//! - Assertion macros and polling helpers

#![allow(dead_code)]

use std::time::Duration;

use chrono::Utc;
use threadify::shared::{NewPost, Post};
use uuid::Uuid;

#[cfg(feature = "ssr")]
pub mod server;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// A root post as the store would return it
pub fn root_post(title: &str, text: &str) -> Post {
    NewPost::root(title, text).into_post(Uuid::new_v4(), Utc::now())
}

/// A reply to `parent` as the store would return it
pub fn reply_post(parent: &Post, text: &str) -> Post {
    NewPost::reply(parent.id, text).into_post(Uuid::new_v4(), Utc::now())
}

/// Poll `check` until it yields a value or `limit` elapses
pub async fn wait_for<T>(limit: Duration, mut check: impl FnMut() -> Option<T>) -> Option<T> {
    let deadline = tokio::time::Instant::now() + limit;
    loop {
        if let Some(value) = check() {
            return Some(value);
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
