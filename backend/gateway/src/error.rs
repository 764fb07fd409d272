use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use stridesplit_core::AnalysisError;

/// Errors surfaced by the analyze endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,

    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("{0}")]
    Analysis(#[from] AnalysisError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingImage => StatusCode::BAD_REQUEST,
            Self::ApiKeyMissing | Self::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Analysis request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
