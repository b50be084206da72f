use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus whether LLM enhancement is active, so
/// callers can tell a deterministic-only deployment from a degraded one.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "verdict-api",
        "enhancement_enabled": state.config.enhancement_active()
    }))
}
