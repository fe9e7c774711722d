use std::path::Path;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use crate::presentation::state::AppState;

/// Component status report: makes degraded capacity (missing credential,
/// unloaded classifiers) visible instead of letting it surface as mystery
/// failures downstream.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let upload_folder = if Path::new(&state.settings.uploads.directory).exists() {
        "exists"
    } else {
        "missing"
    };

    Json(json!({
        "status": "running",
        "gemini_api": if state.chat_service.is_configured() { "configured" } else { "not_configured" },
        "classifiers": state.prediction_service.availability(),
        "upload_folder": upload_folder,
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}
