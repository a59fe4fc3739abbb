//! Search result types for the movies search service.
//!
//! The list endpoint never returns full documents, only this projection.

use serde::{Deserialize, Serialize};

/// Names of the document fields kept in a search hit.
pub const RESULT_FIELDS: [&str; 3] = ["id", "title", "imdb_rating"];

/// A single projected search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSearchResult {
    /// The movie id.
    pub id: String,

    /// The movie title, `null` when unknown.
    #[serde(default)]
    pub title: Option<String>,

    /// The IMDb rating, `null` when unknown.
    #[serde(default)]
    pub imdb_rating: Option<f64>,
}
