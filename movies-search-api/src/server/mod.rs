// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use movies_search_repository::SearchIndexProvider;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;
use crate::config::create_cors_layer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(provider: Arc<dyn SearchIndexProvider>) -> Router {
    let state = AppState::new(provider);

    Router::new()
        .route("/api/movies", get(handlers::list_movies))
        .route("/api/movies/", get(handlers::list_movies))
        .route("/api/movies/:movie_id", get(handlers::get_movie))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address until Ctrl-C
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Movies endpoint: http://{}/api/movies/", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
