//! This module defines the core data structures used across the movies search system.
//! It re-exports the document, query and result types.

pub mod movie_document;
pub mod search_query;
pub mod search_result;

pub use movie_document::{MovieDocument, PersonRef};
pub use search_query::{MovieQuery, SortOrder};
pub use search_result::MovieSearchResult;
