//! HTTP surface for the faculty dashboard.
//!
//! A thin JSON layer over the profile cache. Response envelopes follow the
//! `{success, data, timestamp}` shape the dashboard frontend consumes; a
//! request can degrade but never crash the process.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::ProfileCache;

/// Shared application context passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile cache, constructed once at startup.
    pub cache: Arc<ProfileCache>,

    /// Roster served when the caller does not name authors.
    pub faculty: Vec<String>,
}

/// Build the API router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/faculty", get(handlers::list_faculty))
        .route("/api/faculty/{id}", get(handlers::get_faculty))
        .route("/api/faculty/{id}/publications", get(handlers::get_publications))
        .route("/api/faculty/{id}/metrics", get(handlers::get_metrics))
        .route("/api/cache/clear", post(handlers::clear_cache))
        .route("/api/cache/status", get(handlers::cache_status))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API until ctrl-c.
///
/// # Errors
///
/// Returns error if the listener cannot bind or the server fails.
pub async fn run(state: AppState, port: u16) -> anyhow::Result<()> {
    let router = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("HTTP server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
