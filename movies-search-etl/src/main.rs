//! Movies Search ETL entry point.
//!
//! Runs the indexing pipeline once and exits.

use dotenv::dotenv;
use movies_search_etl::{Dependencies, IndexingError};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("movies_search_etl=info,movies_search_repository=info"));

    let json_output = env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "movies-search-etl",
        service_version = env!("CARGO_PKG_VERSION"),
        json = json_output,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    dotenv().ok();
    init_tracing();

    let deps = match Dependencies::new().await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match deps.orchestrator.run().await {
        Ok(report) if report.is_clean() => {
            info!(indexed = report.load_summary.succeeded, "Movies indexed");
            Ok(())
        }
        Ok(report) => {
            for failure in &report.transform_failures {
                warn!(movie_id = %failure.movie_id(), error = %failure, "Movie not indexed");
            }
            warn!(
                indexed = report.load_summary.succeeded,
                rejected = report.transform_failures.len(),
                index_failures = report.load_summary.failed,
                "Movies indexed with failures"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Movies indexing pipeline failed");
            Err(e.into())
        }
    }
}
