// HTTP request handlers
use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use movies_search_shared::MovieSearchResult;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::validation::validate_args;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Movies search API is running")
}

/// List endpoint - browses the catalogue or runs a full-text search
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<MovieSearchResult>>> {
    let validated = validate_args(&params);
    if !validated.success {
        warn!(errors = ?validated.errors, "Rejected list request");
        return Err(ApiError::Validation(validated.errors));
    }

    let results = state.movies.search_movies(&validated.query).await?;
    info!(
        count = results.len(),
        page = validated.query.page,
        "Listed movies"
    );
    Ok(Json(results))
}

/// Detail endpoint - returns the stored document of one movie
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let document = state.movies.get_movie(&movie_id).await?;
    Ok(Json(document))
}
