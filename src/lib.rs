use crate::config::AllowedOrigins;
use axum::{Router, http::Method, routing::get};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod db;
pub mod handlers;
pub mod logger;
pub mod models;

/// A type alias for the database connection pool.
pub type Pool = sqlx::SqlitePool;

/// The shared state for our application.
#[derive(Clone)]
pub struct ApiState {
    pub pool: Pool,
}

/// The shared state for our application, including the database connection pool.
pub type AppState = axum::extract::State<ApiState>;

/// Creates the application state from a database URL string, applying migrations first.
pub async fn create_app_state(
    db_url: &str,
    max_connections: u32,
) -> Result<ApiState, Box<dyn std::error::Error>> {
    // Set up the database connection pool
    let pool: Pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;
    db::run_migrations(&pool).await?;

    create_app_state_with_pool(pool).await
}

/// Creates the application state from an existing database pool.
/// This is useful for tests where the pool is created and migrated manually.
pub async fn create_app_state_with_pool(
    pool: Pool,
) -> Result<ApiState, Box<dyn std::error::Error>> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
        .fetch_one(&pool)
        .await?;
    tracing::info!(count, "destination store ready");

    Ok(ApiState { pool })
}

/// Builds the CORS layer for the configured origin policy.
fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let origin = match allowed_origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(origins) => AllowOrigin::list(origins.clone()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Creates the main Axum router for the application.
pub fn create_router(app_state: ApiState, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/api/destinations", get(handlers::destinations::get_all))
        .route(
            "/api/destinations/search",
            get(handlers::destinations::search),
        )
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
