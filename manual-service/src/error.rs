//! Errors raised while generating a manual.

use crate::services::providers::ProviderError;
use axum::response::{IntoResponse, Response};
use service_core::error::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ManualError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Gemini API is not configured: {0}")]
    Configuration(String),

    #[error("Gemini API request failed: {0}")]
    ExternalService(String),

    #[error("Gemini API returned no candidates")]
    EmptyResponse,

    #[error("Failed to parse JSON from model response: {0}")]
    Parse(String),

    #[error("Model response is missing required fields: {}", .0.join(", "))]
    IncompleteResult(Vec<&'static str>),
}

impl From<ValidationErrors> for ManualError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ManualError::MissingParameter(fields.join(", "))
    }
}

impl From<ProviderError> for ManualError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => ManualError::Configuration(msg),
            ProviderError::EmptyResponse => ManualError::EmptyResponse,
            ProviderError::ApiError { status, body } => {
                ManualError::ExternalService(format!("status {}: {}", status, body))
            }
            ProviderError::NetworkError(msg) | ProviderError::InvalidResponse(msg) => {
                ManualError::ExternalService(msg)
            }
        }
    }
}

impl From<ManualError> for AppError {
    fn from(err: ManualError) -> Self {
        let message = err.to_string();
        match err {
            ManualError::MissingParameter(_) | ManualError::InvalidBody(_) => {
                AppError::BadRequest(anyhow::anyhow!(message))
            }
            ManualError::Configuration(_) => AppError::ConfigError(anyhow::anyhow!(message)),
            ManualError::ExternalService(_) | ManualError::EmptyResponse => {
                AppError::BadGateway(message)
            }
            ManualError::Parse(_) | ManualError::IncompleteResult(_) => {
                AppError::InternalError(anyhow::anyhow!(message))
            }
        }
    }
}

impl IntoResponse for ManualError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
