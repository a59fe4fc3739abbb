//! Orchestrator module for the movies indexing pipeline.
//!
//! Coordinates the source, processor, and loader components for one run.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::{IngestError, TransformError};
use crate::loader::SearchLoader;
use crate::processor::{MovieProcessor, PersonTable};
use crate::source::MovieSource;
use movies_search_repository::BatchOperationSummary;

/// Outcome of a pipeline run.
///
/// Rejected rows and documents the index refused are reported here rather
/// than failing the run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Rows read from the movies table.
    pub rows_extracted: usize,
    /// Documents produced by the transformer.
    pub documents_transformed: usize,
    /// Rows the transformer rejected.
    pub transform_failures: Vec<TransformError>,
    /// Per-document result of the bulk load.
    pub load_summary: BatchOperationSummary,
}

impl PipelineReport {
    /// Whether every row was transformed and every document indexed.
    pub fn is_clean(&self) -> bool {
        self.transform_failures.is_empty() && self.load_summary.is_success()
    }
}

/// Orchestrator that runs the extract, transform and load stages once.
pub struct Orchestrator {
    source: Arc<dyn MovieSource>,
    loader: SearchLoader,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(source: Arc<dyn MovieSource>, loader: SearchLoader) -> Self {
        Self { source, loader }
    }

    /// Run the pipeline to completion.
    ///
    /// # Returns
    ///
    /// * `Ok(PipelineReport)` - The run finished, possibly with per-row failures
    /// * `Err(IngestError)` - The source could not be read or the index could
    ///   not be prepared
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<PipelineReport, IngestError> {
        info!("Starting movies indexing pipeline");

        let rows = self.source.fetch_movies().await?;
        let actors = PersonTable::from_rows(self.source.fetch_actors().await?);
        let writers = PersonTable::from_rows(self.source.fetch_writers().await?);

        info!(
            movies = rows.len(),
            actors = actors.len(),
            writers = writers.len(),
            "Extracted source data"
        );

        let processor = MovieProcessor::new(actors, writers);
        let batch = processor.process_batch(&rows);

        if !batch.failures.is_empty() {
            warn!(
                failed = batch.failures.len(),
                "Some movies were rejected during transformation"
            );
        }

        self.loader.prepare_index().await?;
        let load_summary = self.loader.load(&batch.documents).await;

        let report = PipelineReport {
            rows_extracted: rows.len(),
            documents_transformed: batch.documents.len(),
            transform_failures: batch.failures,
            load_summary,
        };

        info!(
            rows_extracted = report.rows_extracted,
            documents_transformed = report.documents_transformed,
            transform_failures = report.transform_failures.len(),
            indexed = report.load_summary.succeeded,
            index_failures = report.load_summary.failed,
            "Movies indexing pipeline finished"
        );

        Ok(report)
    }
}
