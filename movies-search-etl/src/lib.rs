//! # Movies Search ETL
//!
//! Batch pipeline that denormalizes the movies database into search
//! documents and loads them into OpenSearch.
//!
//! ## Architecture
//!
//! The pipeline follows the Source-Processor-Loader pattern:
//!
//! 1. **Source**: Reads movies, actors and writers from SQLite
//! 2. **Processor**: Resolves persons and builds one document per movie
//! 3. **Loader**: Upserts documents into OpenSearch in bulk chunks
//! 4. **Orchestrator**: Runs the stages once and reports the outcome
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`source`]: Relational source
//! - [`processor`]: Transforms rows into documents
//! - [`loader`]: Indexes documents into OpenSearch
//! - [`orchestrator`]: Coordinates a pipeline run
//! - [`errors`]: Error types for the pipeline

pub mod config;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod source;

pub use config::Dependencies;
pub use errors::{IngestError, TransformError};
pub use orchestrator::{Orchestrator, PipelineReport};

use thiserror::Error;

/// Errors that can occur during pipeline initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
