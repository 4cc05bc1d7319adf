//! Chat completions transport
//!
//! One outbound request per capability call, no retries. Any failure is
//! returned as a `PitchError` for the enhancer to turn into a fallback.

use crate::types::{ChatMessage, ChatRequest, ChatResponse, CompletionRequest};
use async_trait::async_trait;
use pitch_core::config::EnhancementConfig;
use pitch_core::{PitchError, Result};
use std::time::Duration;

/// Something that can answer a single-turn prompt
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Return the trimmed completion text for `request`
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// OpenAI-compatible chat completions client
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client from the enhancement config and a credential
    pub fn new(config: &EnhancementConfig, api_key: impl Into<String>) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PitchError::Enhancement(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn to_chat_request(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        tracing::debug!(
            "Sending {} request to {} (model {})",
            request.capability,
            self.base_url,
            self.model
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.to_chat_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PitchError::Timeout(self.timeout.as_secs())
                } else {
                    PitchError::Enhancement(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(PitchError::Enhancement(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| PitchError::Enhancement(format!("Failed to parse response: {}", e)))?;

        let content = chat
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| PitchError::Enhancement("No choices in response".to_string()))?;

        if let Some(usage) = chat.usage {
            tracing::debug!(
                "{} complete ({} prompt tokens, {} completion tokens)",
                request.capability,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        Ok(content)
    }
}
