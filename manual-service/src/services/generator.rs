use crate::error::ManualError;
use crate::models::{GenerationRequest, GenerationResult};
use crate::services::parser::parse_manual;
use crate::services::prompt::build_prompt;
use crate::services::providers::TextProvider;
use std::sync::Arc;
use validator::Validate;

/// Turns a category/menu request into a validated manual via one provider call.
#[derive(Clone)]
pub struct ManualGenerator {
    provider: Arc<dyn TextProvider>,
}

impl ManualGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    #[tracing::instrument(
        skip(self, request),
        fields(category = %request.category(), menu = %request.menu())
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ManualError> {
        request.validate()?;

        let prompt = build_prompt(request);
        let response = self.provider.generate(&prompt).await?;

        tracing::info!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            text_len = response.text.len(),
            "Received model response"
        );

        parse_manual(&response.text).inspect_err(|e| {
            tracing::error!(error = %e, "Model response rejected");
            tracing::debug!(text = %response.text, "Rejected model text");
        })
    }
}
