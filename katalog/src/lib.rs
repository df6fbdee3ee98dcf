//! # katalog: Product Catalog Service
//!
//! `katalog` is a small REST backend for browsing and maintaining a product catalog. It serves
//! a JSON API for categories, products and users, together with an embedded single-page
//! frontend, from one binary backed by a single SQLite file.
//!
//! ## Overview
//!
//! The catalog is two tables, categories and products, joined by a foreign key. Categories are
//! a fixed set shipped with the schema and exposed read-only. Products are maintained entirely
//! through the API: full CRUD, a category filter and a substring search on the name. The user
//! endpoints are a fixture-backed placeholder kept so the frontend flows stay exercisable.
//!
//! ### What It Does
//!
//! A request to `/api/products` is validated, translated into a filtered SELECT through a
//! repository, and the joined rows come back as camelCase JSON with the category name inlined.
//! Writes run through an explicit validation step before any SQL, so incomplete payloads are
//! rejected with a 400 that lists the required fields. Everything outside `/api` serves the
//! embedded frontend, with an SPA fallback for client-side routes.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses SQLite (via sqlx) for persistence. Migrations run automatically on startup, so the
//! binary plus one writable directory is a complete deployment.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) exposes the REST endpoints under `/api`. Handlers validate
//! input and shape responses; models define the wire format and its conversion to and from
//! the database structs.
//!
//! The **database layer** ([`db`]) uses the repository pattern to abstract data access. Each
//! entity has a repository that owns its SQL, and the product listing is composed dynamically
//! from the optional filters with bound parameters.
//!
//! **Static assets** are compiled into the binary with `rust-embed` and served with an SPA
//! fallback, so the frontend needs no separate web server.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use katalog::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Parse CLI arguments and load configuration
//!     let args = katalog::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     // Initialize telemetry (structured logging)
//!     katalog::telemetry::init_telemetry()?;
//!
//!     // Create and start the application
//!     let app = Application::new(config).await?;
//!
//!     // Run with graceful shutdown on Ctrl+C
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! The application runs its migrations on startup, creating the database file if needed:
//!
//! ```no_run
//! # use sqlx::SqlitePool;
//! # async fn example(pool: SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
//! // Run migrations
//! katalog::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
mod static_assets;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;
use axum::http::{HeaderValue, Method, header};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
pub use config::Config;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{CategoryId, ProductId, UserId};

/// Application state shared across all request handlers.
///
/// # Fields
///
/// - `db`: SQLite connection pool
/// - `config`: Application configuration loaded from environment/files
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the katalog database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the SQLite pool and bring the schema up to date
async fn setup_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        // SQLite only enforces foreign keys when the pragma is set, per connection
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.pool.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.pool.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        let header_value = match origin {
            CorsOrigin::Wildcard => "*".parse::<HeaderValue>()?,
            // Origin headers carry no path, serialize without the trailing slash
            CorsOrigin::Url(url) => url.origin().ascii_serialization().parse::<HeaderValue>()?,
        };
        origins.push(header_value);
    }

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(config.cors.allow_credentials);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the main application router with all endpoints and middleware.
///
/// This function constructs the complete Axum router with:
/// - The catalog API under `/api`
/// - OpenAPI documentation at `/docs` (raw JSON at `/docs/openapi.json`)
/// - Static asset serving and SPA fallback
/// - CORS configuration
/// - Tracing middleware
///
/// # Errors
///
/// Returns an error if the CORS configuration is invalid.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        // Categories are read-only
        .route("/categories", get(api::handlers::categories::list_categories))
        // Product catalog CRUD
        .route("/products", get(api::handlers::products::list_products))
        .route("/products", post(api::handlers::products::create_product))
        .route("/products/{id}", get(api::handlers::products::get_product))
        .route("/products/{id}", put(api::handlers::products::update_product))
        .route("/products/{id}", delete(api::handlers::products::delete_product))
        // Users (fixture-backed)
        .route("/users", get(api::handlers::users::list_users))
        .route("/users", post(api::handlers::users::create_user))
        .route("/users/{id}", get(api::handlers::users::get_user))
        .route("/users/{id}", put(api::handlers::users::update_user))
        .route("/users/{id}", delete(api::handlers::users::delete_user))
        .with_state(state.clone());

    // Serve embedded static assets, falling back to SPA for unmatched routes
    let fallback = get(api::handlers::static_assets::serve_embedded_asset).fallback(get(api::handlers::static_assets::spa_fallback));

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/docs/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .fallback_service(fallback);

    // Create CORS layer from config
    let cors_layer = create_cors_layer(&state.config)?;
    let router = router.layer(cors_layer);

    // Add tracing layer
    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] opens the database pool and runs migrations
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown signal resolves, in-flight requests drain and the
///    pool is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting catalog service with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;

        Self::with_pool(config, pool)
    }

    /// Create an application on an existing pool. Migrations are assumed to have run.
    pub fn with_pool(config: Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };

        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Catalog service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
