//! OpenSearch index settings and mappings.
//!
//! This module defines the index settings and mappings for the movies index.

use serde_json::{json, Value};

/// The default name of the movies index.
pub const INDEX_NAME: &str = "movies";

/// Get the index settings and mappings for the movies index.
///
/// The configuration includes:
/// - **Keyword fields**: `id` and `genre`, for exact lookups and sorting
/// - **Text fields**: the full-text search targets, with a `raw` keyword
///   subfield on `title` for sorting by title
/// - **Nested persons**: `actors` and `writers` as `{id, name}` objects
///
/// # Sharding Configuration
///
/// - 1 primary shard
/// - 1 replica for redundancy
pub fn get_index_settings() -> Value {
    let person = json!({
        "type": "nested",
        "dynamic": "strict",
        "properties": {
            "id": { "type": "long" },
            "name": { "type": "text" }
        }
    });

    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1,
            "refresh_interval": "1s"
        },
        "mappings": {
            "dynamic": "strict",
            "properties": {
                "id": { "type": "keyword" },
                "imdb_rating": { "type": "float" },
                "genre": { "type": "keyword" },
                "title": {
                    "type": "text",
                    "fields": {
                        "raw": { "type": "keyword" }
                    }
                },
                "description": { "type": "text" },
                "director": { "type": "text" },
                "actors_names": { "type": "text" },
                "writers_names": { "type": "text" },
                "actors": person.clone(),
                "writers": person
            }
        }
    })
}
