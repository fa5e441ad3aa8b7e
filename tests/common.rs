use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use planora_api::{ApiState, db};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt; // for `oneshot`

/// Helper function to set up a test environment with an in-memory DB holding `names`.
pub async fn setup_test_env(names: &[&str]) -> ApiState {
    // 1. Create an in-memory SQLite database pool. One connection that never
    //    expires, since every new connection would see a fresh empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database pool.");

    // 2. Run the migrations.
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations on in-memory database.");

    // 3. Seed the destinations.
    for name in names {
        sqlx::query("INSERT INTO destinations (name) VALUES (?)")
            .bind(name)
            .execute(&pool)
            .await
            .expect("Failed to seed destination.");
    }

    // 4. Create the app state with the migrated database.
    planora_api::create_app_state_with_pool(pool)
        .await
        .expect("Failed to create test app state.")
}

/// Sends a GET request to `uri` through the router.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Reads the whole response body.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
