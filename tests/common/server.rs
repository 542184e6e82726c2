//! Server fixtures backed by the in-memory store

use std::net::SocketAddr;

use axum_test::TestServer;
use threadify::backend::server::{create_app, ServerConfig};
use threadify::backend::ParentPolicy;
use threadify::egui_app::Config;
use threadify::shared::AppConfig;

/// Configuration that never touches a database
pub fn memory_config() -> ServerConfig {
    ServerConfig {
        database_url: None,
        ..ServerConfig::default()
    }
}

/// In-process server using axum-test's mock transport
pub async fn create_test_server() -> TestServer {
    create_test_server_with(memory_config()).await
}

pub async fn create_test_server_with(config: ServerConfig) -> TestServer {
    let app = create_app(&config).await;
    TestServer::new(app).unwrap()
}

pub async fn create_lenient_test_server() -> TestServer {
    create_test_server_with(ServerConfig {
        parent_policy: ParentPolicy::AllowDangling,
        ..memory_config()
    })
    .await
}

/// Serve the app on an ephemeral local port
pub async fn spawn_server() -> SocketAddr {
    let app = create_app(&memory_config()).await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Desktop client configuration pointing at `addr`
pub fn client_config(addr: SocketAddr) -> Config {
    Config::with_builder(AppConfig::builder().server_url(format!("http://{}", addr))).unwrap()
}
