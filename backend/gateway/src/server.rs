//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use stridesplit_core::PaceAnalyzer;

use crate::{analyze_api, health_api};

/// Application state shared across routes.
pub struct AppState {
    /// Configured vision provider. `None` when no API key is present; the
    /// analyze handler turns that into the missing-credential error.
    pub analyzer: Option<Arc<dyn PaceAnalyzer>>,
}

/// Build the Axum router with all API routes.
///
/// The permissive CORS layer also answers `OPTIONS` preflight with 200;
/// non-POST methods on `/api/analyze` get 405 from the method router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_api::analyze))
        .route("/api/health", get(health_api::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the main Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
