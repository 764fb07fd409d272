//! Run/walk analysis endpoint (`POST /api/analyze`).

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use stridesplit_core::RunWalkAnalysis;

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64-encoded screenshot of the pace graph.
    #[serde(default)]
    pub image: String,
}

/// Handler for `POST /api/analyze`.
///
/// Validates the request locally, then delegates the actual image
/// interpretation to the configured vision provider.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<RunWalkAnalysis>, ApiError> {
    if payload.image.is_empty() {
        return Err(ApiError::MissingImage);
    }

    let analyzer = state.analyzer.as_ref().ok_or(ApiError::ApiKeyMissing)?;

    info!(provider = analyzer.name(), "Analyzing pace graph");
    let analysis = analyzer.analyze(&payload.image).await?;

    Ok(Json(analysis))
}
