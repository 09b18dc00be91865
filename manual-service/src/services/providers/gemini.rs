//! Gemini AI provider implementation.
//!
//! Calls the non-streaming `generateContent` method of Google's Gemini API.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base: String,
    pub timeout: Option<Duration>,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ProviderError::NetworkError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    /// URL for `method` on the configured model, without the key.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method
        )
    }

    fn api_key(&self) -> Result<&SecretString, ProviderError> {
        self.config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured("GEMINI_API_KEY is not set".to_string()))
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let api_key = self.api_key()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        // Errors are stripped of their URL: it carries the key.
        let response = self
            .client
            .post(self.api_url("generateContent"))
            .query(&[("key", api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status.as_u16(),
                body = %body,
                model = %self.config.model,
                "Gemini API error"
            );
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!(
                "Failed to decode response: {}",
                e.without_url()
            ))
        })?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(ProviderError::EmptyResponse)?;

        let usage = api_response.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
        })
    }

    fn health_check(&self) -> Result<(), ProviderError> {
        self.api_key().map(|_| ())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider(server: &MockServer, api_key: Option<&str>) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.map(|k| SecretString::new(k.to_string())),
            model: "gemini-test".to_string(),
            api_base: server.base_url(),
            timeout: Some(Duration::from_secs(5)),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sends_prompt_and_returns_first_candidate_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-test:generateContent")
                    .query_param("key", "secret-key")
                    .json_body(json!({
                        "contents": [{ "parts": [{ "text": "hello" }] }]
                    }));
                then.status(200).json_body(json!({
                    "candidates": [
                        { "content": { "parts": [{ "text": "first" }] } },
                        { "content": { "parts": [{ "text": "second" }] } }
                    ],
                    "usageMetadata": { "promptTokenCount": 3, "candidatesTokenCount": 7 }
                }));
            })
            .await;

        let response = provider(&server, Some("secret-key"))
            .generate("hello")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.text, "first");
        assert_eq!(response.input_tokens, 3);
        assert_eq!(response.output_tokens, 7);
    }

    #[tokio::test]
    async fn non_success_status_surfaces_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(403).body("API key not valid");
            })
            .await;

        let err = provider(&server, Some("bad-key"))
            .generate("hello")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::ApiError {
                status: 403,
                body: "API key not valid".to_string()
            }
        );
    }

    #[tokio::test]
    async fn no_candidates_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let err = provider(&server, Some("key"))
            .generate("hello")
            .await
            .unwrap_err();

        assert_eq!(err, ProviderError::EmptyResponse);
    }

    #[tokio::test]
    async fn candidate_without_content_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
            })
            .await;

        let err = provider(&server, Some("key"))
            .generate("hello")
            .await
            .unwrap_err();

        assert_eq!(err, ProviderError::EmptyResponse);
    }

    #[tokio::test]
    async fn missing_key_never_reaches_the_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200);
            })
            .await;

        let provider = provider(&server, None);
        let err = provider.generate("hello").await.unwrap_err();

        assert!(matches!(err, ProviderError::NotConfigured(_)));
        assert!(provider.health_check().is_err());
        mock.assert_hits_async(0).await;
    }

    #[test]
    fn api_url_ignores_trailing_slash() {
        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: None,
            model: "gemini-1.5-flash-latest".to_string(),
            api_base: "https://example.test/v1beta/".to_string(),
            timeout: None,
        })
        .unwrap();

        assert_eq!(
            provider.api_url("generateContent"),
            "https://example.test/v1beta/models/gemini-1.5-flash-latest:generateContent"
        );
    }
}
