use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InternalError(#[from] anyhow::Error),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // Upstream failures surface as plain 500s to callers of this API.
            AppError::InternalError(_) | AppError::BadGateway(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let status = self.status_code();
        let error = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), error = %error, "Request failed");
        } else {
            tracing::warn!(status = %status.as_u16(), error = %error, "Request rejected");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}
