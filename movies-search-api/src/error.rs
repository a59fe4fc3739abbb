use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_search_repository::SearchIndexError;
use serde_json::json;

/// Error type for HTTP handlers.
///
/// Implements [`IntoResponse`]; a missing movie is answered with an empty
/// 404 body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Query parameters failed validation.
    #[error("Invalid query parameters: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No movie has the requested id.
    #[error("Movie not found")]
    NotFound,

    /// The search backend did not answer the liveness probe.
    #[error("Search backend is unavailable")]
    BackendUnavailable,

    /// A request to the search backend failed.
    #[error("Search backend error: {0}")]
    Backend(#[from] SearchIndexError),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BackendUnavailable => {
                tracing::error!("Search backend is not available");
                internal_error()
            }
            ApiError::Backend(err) => {
                tracing::error!(error = %err, "Search backend error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "An internal error occurred" })),
    )
        .into_response()
}
