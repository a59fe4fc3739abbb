//! # Movies Search Repository
//!
//! This crate provides the seam between the movies search system and its
//! search engine. It includes the unified error type, the provider trait,
//! the query builder that turns a `MovieQuery` into a search request, and a
//! concrete implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod query;
pub mod types;

pub use config::SearchIndexConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchProvider;
pub use query::build_search_request;
pub use types::{BatchOperationResult, BatchOperationSummary, SearchRequest};
