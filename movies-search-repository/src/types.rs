//! Request and response types for search index operations.

use serde_json::Value;

use crate::errors::SearchIndexError;

/// A search request ready to be sent to the backend.
///
/// Produced by [`build_search_request`](crate::query::build_search_request).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// The request body holding the `query` clause.
    pub body: Value,
    /// Number of hits to skip.
    pub from: usize,
    /// Maximum number of hits to return.
    pub size: usize,
    /// Sort clauses in `field:order` form.
    pub sort: Vec<String>,
    /// Source fields kept in each hit.
    pub source_fields: Vec<String>,
}

/// Result of a batch operation for a single document.
///
/// This struct represents the outcome of a single write within a bulk request.
/// It indicates whether the operation succeeded and includes error details if
/// it failed.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// The index document id (the movie id).
    pub document_id: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Error if the operation failed.
    pub error: Option<SearchIndexError>,
}

impl BatchOperationResult {
    /// A successful result for `document_id`.
    pub fn succeeded(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            success: true,
            error: None,
        }
    }

    /// A failed result for `document_id`.
    pub fn failed(document_id: impl Into<String>, error: SearchIndexError) -> Self {
        Self {
            document_id: document_id.into(),
            success: false,
            error: Some(error),
        }
    }
}

/// Summary of a batch operation containing aggregate statistics and individual results.
///
/// This struct provides a complete overview of a bulk operation, including the total
/// number of documents processed, how many succeeded and failed, and detailed results
/// for each document. This allows callers to handle partial failures gracefully.
#[derive(Debug, Clone, Default)]
pub struct BatchOperationSummary {
    /// Total number of documents in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Individual results for each document.
    pub results: Vec<BatchOperationResult>,
}

impl BatchOperationSummary {
    /// Build a summary from individual results, computing the counters.
    pub fn from_results(results: Vec<BatchOperationResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    /// Append the results of another summary.
    pub fn merge(&mut self, other: BatchOperationSummary) {
        self.total += other.total;
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.results.extend(other.results);
    }

    /// Whether every document was written.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Iterate over the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &BatchOperationResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_results_counts() {
        let summary = BatchOperationSummary::from_results(vec![
            BatchOperationResult::succeeded("1"),
            BatchOperationResult::failed("2", SearchIndexError::index("mapper_parsing_exception")),
            BatchOperationResult::succeeded("3"),
        ]);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.is_success());
        assert_eq!(
            summary.failures().map(|r| r.document_id.as_str()).collect::<Vec<_>>(),
            vec!["2"]
        );
    }

    #[test]
    fn test_merge() {
        let mut summary = BatchOperationSummary::from_results(vec![BatchOperationResult::succeeded("1")]);
        summary.merge(BatchOperationSummary::from_results(vec![BatchOperationResult::failed(
            "2",
            SearchIndexError::bulk_index("timeout"),
        )]));

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results.len(), 2);
    }

    #[test]
    fn test_empty_summary_is_success() {
        let summary = BatchOperationSummary::default();
        assert_eq!(summary.total, 0);
        assert!(summary.is_success());
    }
}
