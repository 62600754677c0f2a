use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::models::timestamp_now;
use crate::state::AppState;

/// GET /api/health
/// Returns a static status object plus whether the language model is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_version": env!("CARGO_PKG_VERSION"),
        "openai_configured": state.assistant.is_configured(),
        "timestamp": timestamp_now()
    }))
}
