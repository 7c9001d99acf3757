pub mod api;

use axum::{http::Uri, routing::get, Router};

mod client;
mod config;
mod error;
mod routes;

use self::routes::*;

pub use self::config::{AppState, BridgeConfig, ServerConfig};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/connectivity", get(get_connectivity))
        .route("/health", get(get_health))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> error::ServerError {
    error::ServerError::NotFound(uri)
}
