//! Test utilities shared by the handler and router tests.

use crate::config::{Config, DatabaseConfig, PoolSettings};
use axum_test::TestServer;
use sqlx::SqlitePool;

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::with_pool(config, pool).expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig {
            // The pool is injected directly, this URL is never dialed
            url: "sqlite::memory:".to_string(),
            pool: PoolSettings {
                max_connections: 1,
                ..Default::default()
            },
        },
        cors: crate::config::CorsConfig::default(),
    }
}
