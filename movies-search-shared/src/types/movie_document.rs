//! Movie document types for the search index.
//!
//! This module defines the denormalized document structure that is indexed in
//! the search engine, one per movie.

use serde::{Deserialize, Serialize};

/// A person (actor or writer) attached to a movie document.
///
/// Only persons whose name resolved to a real value are ever stored; the
/// ordering derives sort by `id` first, then by `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
}

impl PersonRef {
    /// Create a new person reference.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Document representation for the search index.
///
/// This struct represents a movie as it is stored in the search engine. Every
/// field is always serialized: nullable fields are written as JSON `null`
/// rather than omitted, so fetched documents have a stable shape.
///
/// # Fields
///
/// - `id`: The source movie id, also used as the index document id
/// - `imdb_rating`: Rating, `None` when unknown upstream
/// - `genre`: Ordered list of genres
/// - `title`, `description`, `director`: Raw values, `None` when unknown upstream
/// - `actors`, `writers`: Resolved persons, deduplicated
/// - `actors_names`, `writers_names`: `", "`-joined person names, `None` when empty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDocument {
    pub id: String,
    pub imdb_rating: Option<f64>,
    pub genre: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub actors: Vec<PersonRef>,
    pub writers: Vec<PersonRef>,
    pub actors_names: Option<String>,
    pub writers_names: Option<String>,
}

impl MovieDocument {
    /// Generate the document ID used in the search index.
    ///
    /// The index document id is the movie id itself, so re-indexing a movie
    /// overwrites its previous document.
    pub fn document_id(&self) -> &str {
        &self.id
    }

    /// Join the names of `persons` with `", "`, or `None` if there are none.
    pub fn joined_names(persons: &[PersonRef]) -> Option<String> {
        if persons.is_empty() {
            return None;
        }

        Some(
            persons
                .iter()
                .map(|person| person.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> MovieDocument {
        let actors = vec![PersonRef::new(1, "Keanu Reeves"), PersonRef::new(2, "Carrie-Anne Moss")];
        MovieDocument {
            id: "tt0133093".to_string(),
            imdb_rating: Some(8.7),
            genre: vec!["Action".to_string(), "Sci-Fi".to_string()],
            title: Some("The Matrix".to_string()),
            description: None,
            director: Some("Lana Wachowski".to_string()),
            actors_names: MovieDocument::joined_names(&actors),
            actors,
            writers: vec![],
            writers_names: None,
        }
    }

    #[test]
    fn test_document_id_is_movie_id() {
        let doc = sample_document();
        assert_eq!(doc.document_id(), "tt0133093");
    }

    #[test]
    fn test_joined_names() {
        let persons = vec![PersonRef::new(1, "A"), PersonRef::new(2, "B")];
        assert_eq!(MovieDocument::joined_names(&persons), Some("A, B".to_string()));
    }

    #[test]
    fn test_joined_names_empty_is_none() {
        assert_eq!(MovieDocument::joined_names(&[]), None);
    }

    #[test]
    fn test_null_fields_are_serialized() {
        let doc = sample_document();
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value["description"].is_null());
        assert!(value["writers_names"].is_null());
        assert_eq!(value["writers"], serde_json::json!([]));
        assert_eq!(value["actors_names"], "Keanu Reeves, Carrie-Anne Moss");
        assert_eq!(value.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_serialization() {
        let doc = sample_document();

        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: MovieDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(doc, deserialized);
    }

    #[test]
    fn test_person_ref_ordering() {
        let mut persons = vec![
            PersonRef::new(2, "B"),
            PersonRef::new(1, "Z"),
            PersonRef::new(1, "A"),
        ];
        persons.sort();
        assert_eq!(
            persons,
            vec![PersonRef::new(1, "A"), PersonRef::new(1, "Z"), PersonRef::new(2, "B")]
        );
    }
}
