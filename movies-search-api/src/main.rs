use std::env;
use std::sync::Arc;

use movies_search_api::{config, server};
use movies_search_repository::{OpenSearchProvider, SearchIndexConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("movies_search_api=info,movies_search_repository=info,tower_http=info")
    });

    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment and logging
    dotenv::dotenv().ok();
    init_tracing();

    info!("Starting movies search API...");

    let search_config = SearchIndexConfig::from_env();
    info!(
        opensearch_url = %search_config.url,
        index = %search_config.index,
        "Connecting to search index"
    );
    let provider = OpenSearchProvider::new(&search_config)?;

    let app = server::create_app(Arc::new(provider));
    let addr = config::server_addr();

    if let Err(e) = server::run_server(app, addr).await {
        error!(error = %e, "Server error");
        return Err(e);
    }
    Ok(())
}
