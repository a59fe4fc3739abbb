//! Loader module for the movies indexing pipeline.
//!
//! Upserts transformed documents into the search index in bulk chunks.

use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::errors::IngestError;
use movies_search_repository::{
    BatchOperationResult, BatchOperationSummary, SearchIndexProvider,
};
use movies_search_shared::MovieDocument;

/// Default number of documents per bulk request.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Configuration for the search loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Number of documents sent in one bulk request.
    pub batch_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Loader that indexes documents into the search engine.
///
/// Every document is written with a full-document `index` action keyed by
/// its movie id, so loading the same documents twice leaves the index
/// unchanged.
pub struct SearchLoader {
    provider: Arc<dyn SearchIndexProvider>,
    config: LoaderConfig,
}

impl SearchLoader {
    /// Create a new search loader with the given provider.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self::with_config(provider, LoaderConfig::default())
    }

    /// Create a new search loader with custom configuration.
    pub fn with_config(provider: Arc<dyn SearchIndexProvider>, config: LoaderConfig) -> Self {
        Self { provider, config }
    }

    /// Make sure the target index exists with its mapping.
    pub async fn prepare_index(&self) -> Result<(), IngestError> {
        self.provider.ensure_index_exists().await.map_err(|e| {
            error!(error = %e, "Failed to prepare search index");
            IngestError::index_setup(e.to_string())
        })
    }

    /// Load documents into the search index.
    ///
    /// Documents are sent in chunks of `batch_size`. If a whole chunk is
    /// rejected, each of its documents is recorded as failed and the next
    /// chunk is still sent.
    ///
    /// # Returns
    ///
    /// One result per document, in input order.
    #[instrument(skip(self, documents), fields(document_count = documents.len()))]
    pub async fn load(&self, documents: &[MovieDocument]) -> BatchOperationSummary {
        let mut summary = BatchOperationSummary::default();

        for chunk in documents.chunks(self.config.batch_size.max(1)) {
            let chunk_summary = match self.provider.bulk_upsert(chunk).await {
                Ok(chunk_summary) => chunk_summary,
                Err(e) => {
                    error!(error = %e, count = chunk.len(), "Failed to bulk index documents");
                    BatchOperationSummary::from_results(
                        chunk
                            .iter()
                            .map(|doc| BatchOperationResult::failed(doc.document_id(), e.clone()))
                            .collect(),
                    )
                }
            };

            if chunk_summary.is_success() {
                debug!(count = chunk_summary.succeeded, "Indexed document chunk");
            } else {
                warn!(
                    succeeded = chunk_summary.succeeded,
                    failed = chunk_summary.failed,
                    "Bulk index completed with some failures"
                );
                for result in chunk_summary.failures() {
                    if let Some(ref err) = result.error {
                        error!(
                            movie_id = %result.document_id,
                            error = %err,
                            "Failed to index document"
                        );
                    }
                }
            }

            summary.merge(chunk_summary);
        }

        summary
    }
}
