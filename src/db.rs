use crate::Pool;

/// Applies the embedded schema migrations to the given pool.
pub async fn run_migrations(pool: &Pool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Fetches every destination name, sorted ascending.
pub async fn fetch_all_destination_names(pool: &Pool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM destinations ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Fetches the destination names containing `query`, ignoring case, sorted ascending.
///
/// Both sides are lowercased with Unicode rules before a plain substring test, so
/// `%`, `_` and other characters in the query match literally. SQLite's `lower()`
/// only folds ASCII, so the filter runs here over the ordered names.
///
/// # Arguments
/// * `pool` - The database connection pool.
/// * `query` - The text to look for. An empty string matches every name.
pub async fn search_destination_names(
    pool: &Pool,
    query: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let needle = query.to_lowercase();
    let names = fetch_all_destination_names(pool).await?;

    Ok(names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect())
}
