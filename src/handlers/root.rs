use axum::{http::Uri, response::Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::fixtures::AGENT_NAMES;

/// GET / - liveness
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Clark API Server Running!",
        "status": "Ferrari engine ready 🏎️",
        "version": env!("CARGO_PKG_VERSION"),
        "agents": AGENT_NAMES,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
