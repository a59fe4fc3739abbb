//! SQLite implementation of the movie source.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::errors::IngestError;
use crate::source::{MovieSource, PersonRow, RawMovieRow};

/// Maximum number of pooled connections to the source database.
const MAX_CONNECTIONS: u32 = 4;

/// One row per movie. Actor ids are aggregated; the writer field is whichever
/// of the single-writer and multi-writer columns is filled in.
const MOVIES_QUERY: &str = r#"
    SELECT CAST(movies.id AS TEXT) AS movie_id,
           CAST(movies.imdb_rating AS TEXT) AS imdb_rating,
           movies.genre AS genre,
           movies.title AS title,
           movies.plot AS description,
           movies.director AS director,
           GROUP_CONCAT(movie_actors.actor_id) AS raw_actor_ids,
           MAX(COALESCE(movies.writer, ''), COALESCE(movies.writers, '')) AS raw_writer_field
    FROM movies
    LEFT JOIN movie_actors ON movies.id = movie_actors.movie_id
    GROUP BY movies.id
    ORDER BY movies.id
"#;

const ACTORS_QUERY: &str = r#"
    SELECT CAST(id AS INTEGER) AS id, name
    FROM actors
    WHERE name IS NOT NULL AND name != 'N/A'
    ORDER BY id
"#;

const WRITERS_QUERY: &str = r#"
    SELECT CAST(id AS INTEGER) AS id, name
    FROM writers
    WHERE name IS NOT NULL AND name != 'N/A'
    ORDER BY id
"#;

/// SQLite-backed movie source.
///
/// Expects the `movies`, `movie_actors`, `actors` and `writers` tables of the
/// movies database.
pub struct SqliteMovieSource {
    /// SQLite connection pool
    pool: SqlitePool,
}

impl SqliteMovieSource {
    /// Creates a source over an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool to the database at `url` (e.g. `sqlite://db.sqlite`).
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteMovieSource)` - Ready-to-use source
    /// * `Err(IngestError)` - If the database cannot be opened
    pub async fn connect(url: &str) -> Result<Self, IngestError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;

        info!(url = %url, "Connected to movies database");
        Ok(Self::new(pool))
    }

    async fn fetch_persons(&self, query: &str, table: &str) -> Result<Vec<PersonRow>, IngestError> {
        let rows = sqlx::query_as::<_, PersonRow>(query)
            .fetch_all(&self.pool)
            .await?;

        debug!(table = table, count = rows.len(), "Fetched persons");
        Ok(rows)
    }
}

#[async_trait]
impl MovieSource for SqliteMovieSource {
    async fn fetch_movies(&self) -> Result<Vec<RawMovieRow>, IngestError> {
        let rows = sqlx::query_as::<_, RawMovieRow>(MOVIES_QUERY)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Fetched movies");
        Ok(rows)
    }

    async fn fetch_actors(&self) -> Result<Vec<PersonRow>, IngestError> {
        self.fetch_persons(ACTORS_QUERY, "actors").await
    }

    async fn fetch_writers(&self) -> Result<Vec<PersonRow>, IngestError> {
        self.fetch_persons(WRITERS_QUERY, "writers").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: [&str; 4] = [
        "CREATE TABLE movies (
            id TEXT PRIMARY KEY,
            genre TEXT,
            director TEXT,
            writer TEXT,
            title TEXT,
            plot TEXT,
            ratings TEXT,
            imdb_rating REAL,
            writers TEXT
        )",
        "CREATE TABLE actors (id INTEGER PRIMARY KEY, name TEXT)",
        "CREATE TABLE writers (id INTEGER PRIMARY KEY, name TEXT)",
        "CREATE TABLE movie_actors (movie_id TEXT NOT NULL, actor_id INTEGER NOT NULL)",
    ];

    const FIXTURES: [&str; 7] = [
        "INSERT INTO movies (id, genre, director, writer, title, plot, imdb_rating, writers) VALUES
            ('tt0000001', 'Action, Drama', 'Z', '', 'X', 'Y', 8.1, '[{\"id\": \"10\"}, {\"id\": \"11\"}]'),
            ('tt0000002', 'Comedy', 'N/A', '10', 'Lonely', 'N/A', 'N/A', '')",
        "INSERT INTO actors (id, name) VALUES (1, 'A'), (2, 'N/A'), (3, 'B')",
        "INSERT INTO writers (id, name) VALUES (10, 'W'), (11, 'N/A')",
        "INSERT INTO movie_actors (movie_id, actor_id) VALUES ('tt0000001', 1)",
        "INSERT INTO movie_actors (movie_id, actor_id) VALUES ('tt0000001', 1)",
        "INSERT INTO movie_actors (movie_id, actor_id) VALUES ('tt0000001', 2)",
        "INSERT INTO movie_actors (movie_id, actor_id) VALUES ('tt0000001', 3)",
    ];

    async fn seeded_source() -> SqliteMovieSource {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        for statement in SCHEMA.iter().chain(FIXTURES.iter()) {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        SqliteMovieSource::new(pool)
    }

    #[tokio::test]
    async fn test_fetch_movies_aggregates_actor_ids() {
        let source = seeded_source().await;

        let rows = source.fetch_movies().await.unwrap();

        assert_eq!(rows.len(), 2);
        let first = &rows[0];
        assert_eq!(first.movie_id, "tt0000001");
        assert_eq!(first.imdb_rating.as_deref(), Some("8.1"));
        assert_eq!(first.genre.as_deref(), Some("Action, Drama"));
        assert_eq!(first.description.as_deref(), Some("Y"));

        let mut actor_ids: Vec<&str> = first.raw_actor_ids.as_deref().unwrap().split(',').collect();
        actor_ids.sort();
        assert_eq!(actor_ids, vec!["1", "1", "2", "3"]);

        assert!(first.raw_writer_field.as_deref().unwrap().starts_with('['));
    }

    #[tokio::test]
    async fn test_fetch_movies_without_actors() {
        let source = seeded_source().await;

        let rows = source.fetch_movies().await.unwrap();

        let second = &rows[1];
        assert_eq!(second.movie_id, "tt0000002");
        assert!(second.raw_actor_ids.is_none());
        assert_eq!(second.raw_writer_field.as_deref(), Some("10"));
        assert_eq!(second.imdb_rating.as_deref(), Some("N/A"));
        assert_eq!(second.director.as_deref(), Some("N/A"));
    }

    #[tokio::test]
    async fn test_fetch_persons_excludes_placeholder_names() {
        let source = seeded_source().await;

        let actors = source.fetch_actors().await.unwrap();
        let writers = source.fetch_writers().await.unwrap();

        assert_eq!(actors, vec![PersonRow::new(1, "A"), PersonRow::new(3, "B")]);
        assert_eq!(writers, vec![PersonRow::new(10, "W")]);
    }
}
