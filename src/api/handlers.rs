use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::{RecommendParams, RecommendQuery, RecommendResponse},
    services::recommend,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for the recommend endpoint
///
/// Accepts the optional string parameters `q`, `genre`, `minRating`,
/// `minYear`, `maxYear`, and `sort`; non-numeric values for the numeric
/// filters are ignored rather than rejected.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendResponse>> {
    let query = RecommendQuery::from(params);

    tracing::info!(
        q = %query.text,
        genre = ?query.genre,
        min_rating = ?query.min_rating,
        min_year = ?query.min_year,
        max_year = ?query.max_year,
        sort = ?query.sort,
        "Recommend request"
    );

    let response = recommend::recommend(
        state.provider.clone(),
        state.cache.clone(),
        state.settings,
        &query,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, q = %query.text, "Recommendation pipeline failed");
        e
    })?;

    Ok(Json(response))
}
