//! Text generation provider abstraction.
//!
//! The generator talks to a `TextProvider` so the Gemini backend can be
//! replaced by the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Response contained no candidates")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Text of the first candidate plus usage counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as the sole input and return the first candidate's text.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Cheap local check; never touches the network.
    fn health_check(&self) -> Result<(), ProviderError>;
}
