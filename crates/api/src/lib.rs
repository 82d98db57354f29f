//! HTTP boundary for the Voicehelm voice-command bridge.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/v1/resolve` - Resolve a transcript into an action payload
//!
//! # Architecture
//!
//! ```text
//! Browser / player client
//!    │  {transcript, channels}
//!    ▼
//! ┌─────────────────┐
//! │   API Gateway   │ ◄── this crate
//! │     (Axum)      │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │    Resolver     │ ───► │  agent process  │
//! │   (pipeline)    │      │  (subprocess)   │
//! └─────────────────┘      └─────────────────┘
//! ```

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Create the API router with all routes configured.
///
/// CORS is wide open: the original consumer is a browser-hosted player
/// served from a different origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/v1/resolve", post(routes::resolve))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given address.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(state);

    info!(%addr, "Starting Voicehelm API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
