//! Gateway Health API

use axum::Json;
use serde_json::{json, Value};

/// Handler for `GET /api/health`.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "stridesplit",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
