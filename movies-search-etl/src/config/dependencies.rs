//! Dependency initialization and wiring for the movies indexing pipeline.

use std::env;
use std::sync::Arc;
use tracing::info;

use crate::loader::{LoaderConfig, SearchLoader, DEFAULT_BATCH_SIZE};
use crate::orchestrator::Orchestrator;
use crate::source::SqliteMovieSource;
use crate::IndexingError;
use movies_search_repository::{OpenSearchProvider, SearchIndexConfig};

/// Default location of the movies database.
const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MOVIES_DATABASE_URL`: Source database (default: sqlite://db.sqlite)
    /// - `LOADER_BATCH_SIZE`: Documents per bulk request (default: 500)
    /// - `OPENSEARCH_URL`, `MOVIES_INDEX`, `OPENSEARCH_TIMEOUT_SECS`: see
    ///   [`SearchIndexConfig::from_env`]
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the database or the search client cannot be set up
    pub async fn new() -> Result<Self, IndexingError> {
        let database_url =
            env::var("MOVIES_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let batch_size = env::var("LOADER_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_BATCH_SIZE);
        let search_config = SearchIndexConfig::from_env();

        info!(
            database_url = %database_url,
            opensearch_url = %search_config.url,
            index = %search_config.index,
            batch_size = batch_size,
            "Initializing dependencies"
        );

        let source = SqliteMovieSource::connect(&database_url)
            .await
            .map_err(|e| IndexingError::config(format!("Failed to open movies database: {}", e)))?;

        let search_provider = OpenSearchProvider::new(&search_config).map_err(|e| {
            IndexingError::config(format!("Failed to create OpenSearch provider: {}", e))
        })?;

        let loader =
            SearchLoader::with_config(Arc::new(search_provider), LoaderConfig { batch_size });
        let orchestrator = Orchestrator::new(Arc::new(source), loader);

        Ok(Self { orchestrator })
    }
}
