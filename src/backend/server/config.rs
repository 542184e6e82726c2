/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, including the optional PostgreSQL database connection.
 *
 * # Environment
 *
 * - `SERVER_PORT` - listen port (default 5000)
 * - `DATABASE_URL` - PostgreSQL URL; posts are kept in memory when unset
 * - `BROADCAST_CAPACITY` - events buffered per subscriber (default 1000)
 * - `PARENT_POLICY` - `require-existing` (default) or `allow-dangling`
 *
 * # Error Handling
 *
 * Malformed values are configuration errors. A database that cannot be
 * reached is logged and the server continues with the in-memory store.
 */

use sqlx::PgPool;

use crate::backend::realtime::broadcast::DEFAULT_BROADCAST_CAPACITY;
use crate::backend::threads::ParentPolicy;
use crate::shared::ConfigError;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub broadcast_capacity: usize,
    pub parent_policy: ParentPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            parent_policy: ParentPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let broadcast_capacity = match lookup("BROADCAST_CAPACITY") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BROADCAST_CAPACITY",
                        value,
                    })
                }
            },
            None => defaults.broadcast_capacity,
        };

        let parent_policy = match lookup("PARENT_POLICY") {
            Some(value) => value.parse()?,
            None => defaults.parent_policy,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            port,
            database_url,
            broadcast_capacity,
            parent_policy,
        })
    }
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if the connection fails; the caller falls back to memory
pub async fn load_database(database_url: &str) -> Option<PgPool> {
    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Posts will be kept in memory only.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Posts will be kept in memory only.");
            return None;
        }
    }

    Some(pool)
}
