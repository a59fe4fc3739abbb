//! Movie processor implementation.
//!
//! Transforms source rows into MovieDocument structures for indexing.

use std::collections::BTreeSet;

use movies_search_shared::{MovieDocument, PersonRef};
use tracing::{debug, instrument, warn};

use crate::errors::TransformError;
use crate::processor::person::PersonTable;
use crate::processor::sentinel::{normalize_sentinel, NOT_AVAILABLE};
use crate::processor::writer_field::{parse_id_list, WriterField};
use crate::source::RawMovieRow;

/// Separator between genres in the raw genre column.
const GENRE_SEPARATOR: &str = ", ";

/// Output of a batch transformation.
#[derive(Debug, Default)]
pub struct TransformBatch {
    /// Documents ready for loading, in source order.
    pub documents: Vec<MovieDocument>,
    /// Rows that were rejected.
    pub failures: Vec<TransformError>,
}

/// Nullable scalar columns of a row after placeholder normalization.
struct MovieScalars {
    imdb_rating: Option<String>,
    title: Option<String>,
    description: Option<String>,
    director: Option<String>,
}

impl MovieScalars {
    fn normalized(row: &RawMovieRow) -> Self {
        Self {
            imdb_rating: normalize_sentinel(row.imdb_rating.clone()),
            title: normalize_sentinel(row.title.clone()),
            description: normalize_sentinel(row.description.clone()),
            director: normalize_sentinel(row.director.clone()),
        }
    }
}

/// Processor that transforms source rows into search documents.
///
/// The processor holds the actor and writer tables for one pipeline run and
/// is a pure function of them and its input row.
pub struct MovieProcessor {
    actors: PersonTable,
    writers: PersonTable,
}

impl MovieProcessor {
    /// Create a new movie processor over the given person tables.
    pub fn new(actors: PersonTable, writers: PersonTable) -> Self {
        Self { actors, writers }
    }

    /// Process a batch of source rows.
    ///
    /// A rejected row is recorded in `failures` and never stops the others.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows to transform
    #[instrument(skip(self, rows), fields(row_count = rows.len()))]
    pub fn process_batch(&self, rows: &[RawMovieRow]) -> TransformBatch {
        let mut batch = TransformBatch {
            documents: Vec::with_capacity(rows.len()),
            failures: Vec::new(),
        };

        for row in rows {
            match self.process_row(row) {
                Ok(document) => batch.documents.push(document),
                Err(e) => {
                    warn!(movie_id = %e.movie_id(), error = %e, "Skipping movie");
                    batch.failures.push(e);
                }
            }
        }

        debug!(
            documents = batch.documents.len(),
            failures = batch.failures.len(),
            "Processed movie batch"
        );
        batch
    }

    /// Process a single source row.
    ///
    /// # Returns
    ///
    /// * `Ok(MovieDocument)` - The denormalized document
    /// * `Err(TransformError)` - If the row holds uninterpretable data
    pub fn process_row(&self, row: &RawMovieRow) -> Result<MovieDocument, TransformError> {
        let integrity = |reason: String| TransformError::data_integrity(&row.movie_id, reason);

        let actor_ids = parse_id_list(row.raw_actor_ids.as_deref().unwrap_or_default())
            .map_err(integrity)?;
        let writer_ids = WriterField::detect(row.raw_writer_field.as_deref().unwrap_or_default())
            .into_ids()
            .map_err(integrity)?;

        let scalars = MovieScalars::normalized(row);
        let imdb_rating = scalars
            .imdb_rating
            .as_deref()
            .map(parse_rating)
            .transpose()
            .map_err(integrity)?;

        let actors = resolve_persons(&self.actors, &actor_ids);
        let writers = resolve_persons(&self.writers, &writer_ids);

        Ok(MovieDocument {
            id: row.movie_id.clone(),
            imdb_rating,
            genre: split_genres(row.genre.as_deref()),
            title: scalars.title,
            description: scalars.description,
            director: scalars.director,
            actors_names: MovieDocument::joined_names(&actors),
            writers_names: MovieDocument::joined_names(&writers),
            actors,
            writers,
        })
    }
}

/// Resolve ids against `table`, dropping unresolved ids and duplicate pairs.
/// The result is sorted by id, then name.
fn resolve_persons(table: &PersonTable, ids: &[i64]) -> Vec<PersonRef> {
    ids.iter()
        .filter_map(|&id| table.resolve(id).map(|name| PersonRef::new(id, name)))
        .filter(|person| !person.name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.map(|genres| {
        genres
            .split(GENRE_SEPARATOR)
            .map(str::trim)
            .filter(|genre| !genre.is_empty() && *genre != NOT_AVAILABLE)
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .ok_or_else(|| format!("invalid imdb_rating '{}'", raw))
}
