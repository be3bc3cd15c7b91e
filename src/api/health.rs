use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "healthy",
        "message": "API is running",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
