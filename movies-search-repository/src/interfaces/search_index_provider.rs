//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use movies_search_shared::{MovieDocument, MovieSearchResult};
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::{BatchOperationSummary, SearchRequest};

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are shared behind an `Arc` by the indexing pipeline and the
/// HTTP service, and swapped for mock implementations in tests.
///
/// Every method issues exactly one request to the backend. Nothing is cached
/// and nothing is retried; a failed request is returned to the caller.
///
/// # Index Initialization
///
/// The indexing pipeline calls `ensure_index_exists` before loading documents
/// so the index is created with the expected mapping.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Ensure the search index exists, creating it with its mapping if necessary.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index is ready for use
    /// * `Err(SearchIndexError)` - If the check or the creation fails
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError>;

    /// Insert or replace documents in bulk, keyed by their movie id.
    ///
    /// Each document fully replaces any previous document with the same id, so
    /// repeating the same call leaves the index in the same state. A failure on
    /// one document does not stop the others from being written.
    ///
    /// # Arguments
    ///
    /// * `documents` - The documents to write
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - One result per document, in input order
    /// * `Err(SearchIndexError)` - If the bulk request fails entirely
    async fn bulk_upsert(
        &self,
        documents: &[MovieDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError>;

    /// Run a search and return the projected hits in ranking order.
    ///
    /// # Arguments
    ///
    /// * `request` - A request produced by `build_search_request`
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<MovieSearchResult>, SearchIndexError>;

    /// Fetch the stored source of a document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(source))` - The stored fields; an empty object when the
    ///   backend returned no source section
    /// * `Ok(None)` - If no document has this id
    /// * `Err(SearchIndexError)` - If the request fails
    async fn get_document(&self, id: &str) -> Result<Option<Value>, SearchIndexError>;

    /// Check whether the backend is reachable.
    async fn ping(&self) -> bool;
}
