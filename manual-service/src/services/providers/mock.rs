//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock text provider with a scripted reply that records how it was called.
pub struct MockTextProvider {
    reply: Result<String, ProviderError>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    /// Every call succeeds with `text` as the first candidate.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    /// Every call fails with `err`.
    pub fn failing(err: ProviderError) -> Self {
        Self::with_reply(Err(err))
    }

    /// Behaves like a provider whose API key was never set.
    pub fn unconfigured() -> Self {
        Self::failing(ProviderError::NotConfigured(
            "GEMINI_API_KEY is not set".to_string(),
        ))
    }

    fn with_reply(reply: Result<String, ProviderError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }

        self.reply.clone().map(|text| ProviderResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
        })
    }

    fn health_check(&self) -> Result<(), ProviderError> {
        match &self.reply {
            Err(ProviderError::NotConfigured(msg)) => {
                Err(ProviderError::NotConfigured(msg.clone()))
            }
            _ => Ok(()),
        }
    }
}
