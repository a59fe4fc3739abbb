//! Error types for the movies indexing pipeline.

use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Error reading from the relational source.
    #[error("Source error: {0}")]
    SourceError(String),

    /// The search index could not be prepared.
    #[error("Index setup error: {0}")]
    IndexSetupError(String),
}

impl IngestError {
    /// Create a source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::SourceError(msg.into())
    }

    /// Create an index setup error.
    pub fn index_setup(msg: impl Into<String>) -> Self {
        Self::IndexSetupError(msg.into())
    }
}

impl From<sqlx::Error> for IngestError {
    fn from(err: sqlx::Error) -> Self {
        Self::SourceError(err.to_string())
    }
}

/// Errors that reject a single source row during transformation.
///
/// These never abort the run: the row is skipped and reported, and the
/// movie id locates the offending source row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The row holds data that cannot be interpreted.
    #[error("Data integrity error in movie {movie_id}: {reason}")]
    DataIntegrity { movie_id: String, reason: String },
}

impl TransformError {
    /// Create a data integrity error for `movie_id`.
    pub fn data_integrity(movie_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            movie_id: movie_id.into(),
            reason: reason.into(),
        }
    }

    /// The id of the movie whose row was rejected.
    pub fn movie_id(&self) -> &str {
        match self {
            Self::DataIntegrity { movie_id, .. } => movie_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_is_source_error() {
        let err: IngestError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, IngestError::SourceError(_)));
    }

    #[test]
    fn test_index_setup_error_display() {
        let err = IngestError::index_setup("cluster read-only");
        assert_eq!(err.to_string(), "Index setup error: cluster read-only");
    }

    #[test]
    fn test_data_integrity_carries_movie_id() {
        let err = TransformError::data_integrity("tt0000007", "invalid imdb_rating 'eight'");
        assert_eq!(err.movie_id(), "tt0000007");
        assert_eq!(
            err.to_string(),
            "Data integrity error in movie tt0000007: invalid imdb_rating 'eight'"
        );
    }
}
