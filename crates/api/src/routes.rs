//! HTTP route handlers for the API.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use voicehelm_common::{ActionPayload, VoicehelmError};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Resolve request body.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub transcript: String,
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Resolve response body.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub transcript: String,
    pub action: ActionPayload,
    pub raw_text: String,
}

/// API error response. Always carries a safe default payload so clients can
/// render something actionable even on failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub action: ActionPayload,
    #[serde(skip_serializing)]
    status: StatusCode,
}

impl ErrorResponse {
    fn from_error(err: VoicehelmError) -> Self {
        match err {
            VoicehelmError::AgentTimeout(_) => Self {
                error: err.to_string(),
                code: "AGENT_TIMEOUT",
                action: ActionPayload::fallback("timeout"),
                status: StatusCode::GATEWAY_TIMEOUT,
            },
            VoicehelmError::AgentUnavailable(_) => Self {
                error: err.to_string(),
                code: "AGENT_UNAVAILABLE",
                action: ActionPayload::fallback("agent_not_installed"),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            other => Self {
                error: other.to_string(),
                code: "RESOLVER_ERROR",
                action: ActionPayload::fallback("server_error"),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Resolve a transcript into an action payload.
pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, ErrorResponse> {
    info!(
        transcript_preview = %request.transcript.chars().take(50).collect::<String>(),
        channel_count = request.channels.len(),
        "Received resolve request"
    );

    let resolution = state
        .resolver
        .resolve(&request.transcript, &request.channels)
        .await
        .map_err(|e| {
            error!(error = %e, "Resolution failed");
            ErrorResponse::from_error(e)
        })?;

    Ok(Json(ResolveResponse {
        transcript: request.transcript.trim().to_string(),
        action: resolution.action,
        raw_text: resolution.raw_text,
    }))
}
