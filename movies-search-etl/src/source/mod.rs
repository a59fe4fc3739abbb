//! Source module for the movies indexing pipeline.
//!
//! Reads movies and persons from the relational database. The source is
//! read-only and is queried once per pipeline run.

mod sqlite;

use async_trait::async_trait;

use crate::errors::IngestError;

pub use sqlite::SqliteMovieSource;

/// One movie as produced by the extraction query, actor ids aggregated.
///
/// Every column is optional text: the source stores ratings as numbers or as
/// the `"N/A"` placeholder, and a movie without actors has no actor ids.
#[derive(Debug, Clone, PartialEq, Default, sqlx::FromRow)]
pub struct RawMovieRow {
    pub movie_id: String,
    pub imdb_rating: Option<String>,
    pub genre: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    /// Comma-separated actor ids.
    pub raw_actor_ids: Option<String>,
    /// Either comma-separated writer ids or a JSON array of `{"id": ..}` objects.
    pub raw_writer_field: Option<String>,
}

/// One row of the actors or writers table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PersonRow {
    pub id: i64,
    pub name: String,
}

impl PersonRow {
    /// Create a new person row.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Trait for reading the movies database.
///
/// This trait abstracts the relational store so the pipeline can be run
/// against mock sources in tests.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one row per movie.
    async fn fetch_movies(&self) -> Result<Vec<RawMovieRow>, IngestError>;

    /// Fetch the actors, placeholder names already excluded.
    async fn fetch_actors(&self) -> Result<Vec<PersonRow>, IngestError>;

    /// Fetch the writers, placeholder names already excluded.
    async fn fetch_writers(&self) -> Result<Vec<PersonRow>, IngestError>;
}
