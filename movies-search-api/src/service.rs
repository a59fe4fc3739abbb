//! Movie lookups against the search index.

use std::sync::Arc;

use movies_search_repository::{build_search_request, SearchIndexProvider};
use movies_search_shared::{MovieQuery, MovieSearchResult};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{ApiError, ApiResult};

/// Stateless service over a shared search provider.
#[derive(Clone)]
pub struct MovieService {
    provider: Arc<dyn SearchIndexProvider>,
}

impl MovieService {
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the stored document of a movie.
    ///
    /// The backend is probed first; an unreachable backend is reported
    /// without attempting the lookup.
    #[instrument(skip(self))]
    pub async fn get_movie(&self, id: &str) -> ApiResult<Value> {
        if !self.provider.ping().await {
            return Err(ApiError::BackendUnavailable);
        }

        self.provider
            .get_document(id)
            .await?
            .ok_or(ApiError::NotFound)
    }

    /// Run a validated list query.
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &MovieQuery) -> ApiResult<Vec<MovieSearchResult>> {
        let request = build_search_request(query);
        let results = self.provider.search(&request).await?;

        debug!(count = results.len(), "Search completed");
        Ok(results)
    }
}
