// App state for Axum server
use std::sync::Arc;

use movies_search_repository::SearchIndexProvider;

use crate::service::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
}

impl AppState {
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            movies: MovieService::new(provider),
        }
    }
}
