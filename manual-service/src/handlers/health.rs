use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Reports whether the Gemini key is present without calling it.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let gemini = match state.generator.provider().health_check() {
        Ok(()) => "configured",
        Err(_) => "not_configured",
    };

    Json(json!({
        "status": "ok",
        "service": "manual-service",
        "version": env!("CARGO_PKG_VERSION"),
        "gemini": gemini
    }))
}
