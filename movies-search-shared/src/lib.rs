//! # Movies Search Shared
//!
//! This crate defines the data structures shared between the indexing pipeline
//! and the HTTP service: the denormalized movie document stored in the search
//! index, the query parameters of a movie search, and the projected search hit.

pub mod types;

pub use types::movie_document::{MovieDocument, PersonRef};
pub use types::search_query::{MovieQuery, SortOrder};
pub use types::search_result::MovieSearchResult;
