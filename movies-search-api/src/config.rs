// Server configuration and environment helpers
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

pub const DEFAULT_SERVER_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Address the server binds to, from `SERVER_HOST` and `SERVER_PORT`
pub fn server_addr() -> SocketAddr {
    let host = match env::var("SERVER_HOST") {
        Ok(raw) => raw.parse::<IpAddr>().unwrap_or_else(|_| {
            warn!(host = %raw, "Invalid SERVER_HOST, using default");
            DEFAULT_SERVER_HOST
        }),
        Err(_) => DEFAULT_SERVER_HOST,
    };
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SERVER_PORT);

    SocketAddr::new(host, port)
}

/// Create CORS layer for the read-only API
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
