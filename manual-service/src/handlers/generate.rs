use crate::error::ManualError;
use crate::models::{GenerationRequest, GenerationResult};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

#[tracing::instrument(skip(state, payload))]
pub async fn generate_manual(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, ManualError> {
    let Json(request) = payload.map_err(|e| ManualError::InvalidBody(e.body_text()))?;

    let result = state.generator.generate(&request).await?;

    tracing::info!("Manual generated");
    Ok(Json(result))
}

/// CORS preflight: 200 with an empty body; the CORS layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
