//! HTTP client for `/threads`
//!
//! Calls are async; [`spawn_request`] runs one on a background thread with
//! its own runtime and hands the result back over an `mpsc` channel so the
//! UI thread only ever polls.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver};

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{NewPost, Post};

/// Client-side request failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{body}")]
    Http { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Http { status, .. } => *status >= 500,
            ClientError::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `/threads` API client
#[derive(Debug, Clone)]
pub struct ThreadsApi {
    config: Config,
    client: Client,
}

impl ThreadsApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `GET /threads`
    pub async fn fetch_threads(&self) -> Result<Vec<Post>, ClientError> {
        let url = self.config.api_url("/threads");
        tracing::debug!("[Threads] GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<Post>>().await?)
    }

    /// `POST /threads`
    pub async fn create_thread(&self, input: &NewPost) -> Result<Post, ClientError> {
        let url = self.config.api_url("/threads");
        tracing::debug!("[Threads] POST {}", url);
        let response = self.client.post(&url).json(input).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Post>().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(http_error(status.as_u16(), &text))
}

/// Build an `Http` error, preferring the server's `{ "error": .. }` message
fn http_error(status: u16, text: &str) -> ClientError {
    let body = serde_json::from_str::<ErrorBody>(text)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                text.trim().to_string()
            }
        });
    ClientError::Http { status, body }
}

/// Run `make_future` on a background thread
pub fn spawn_request<T, F, Fut>(make_future: F) -> Receiver<Result<T, ClientError>>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let result = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt.block_on(make_future()),
            Err(e) => Err(ClientError::Network(format!("failed to create runtime: {}", e))),
        };
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_server_message() {
        let err = http_error(400, r#"{"error":"Post text cannot be empty","status":400}"#);
        assert_eq!(
            err,
            ClientError::Http {
                status: 400,
                body: "Post text cannot be empty".to_string()
            }
        );
        assert_eq!(err.to_string(), "Post text cannot be empty");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = http_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");
        assert!(err.is_retryable());

        let err = http_error(503, "");
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_spawn_request_delivers_result() {
        let rx = spawn_request(|| async { Ok::<_, ClientError>(7) });
        let result = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_unreachable_server_is_network_error() {
        let config = Config::with_builder(
            crate::shared::AppConfig::builder().server_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let api = ThreadsApi::new(config);
        let rx = spawn_request(move || async move { api.fetch_threads().await });
        let result = rx.recv_timeout(std::time::Duration::from_secs(10)).unwrap();
        assert!(matches!(result, Err(ClientError::Network(_))));
    }
}
