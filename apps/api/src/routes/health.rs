use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and which text source
/// generation will try first.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generation = if state.config.anthropic_api_key.is_some() {
        "backend"
    } else {
        "template"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "quill-api",
        "generation": generation
    }))
}
