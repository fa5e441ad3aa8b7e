use crate::{
    AppState, db,
    models::{ApiResponse, SearchParams},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

/// Converts a store failure into a generic `500` and logs the cause.
fn internal_error(err: sqlx::Error) -> (StatusCode, String) {
    tracing::error!(error = %err, "destination query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Handler to get all destination names.
///
/// # Returns
/// - `200 OK` with the names sorted ascending.
/// - `500 Internal Server Error` if there's a database error.
pub async fn get_all(
    State(state): AppState,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, String)> {
    let names = db::fetch_all_destination_names(&state.pool)
        .await
        .map_err(internal_error)?;
    tracing::debug!(count = names.len(), "listed destinations");

    Ok(Json(ApiResponse::success(
        names,
        "Destinations retrieved successfully",
    )))
}

/// Handler to search destination names by case-insensitive substring.
///
/// # Returns
/// - `200 OK` with the matching names sorted ascending.
/// - `400 Bad Request` if the `query` parameter is missing.
/// - `500 Internal Server Error` if there's a database error.
pub async fn search(
    State(state): AppState,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, String)> {
    let names = db::search_destination_names(&state.pool, &params.query)
        .await
        .map_err(internal_error)?;
    tracing::debug!(query = %params.query, count = names.len(), "searched destinations");

    Ok(Json(ApiResponse::success(names, "Search completed")))
}
