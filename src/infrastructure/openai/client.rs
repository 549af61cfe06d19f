//! HTTP client for the chat completions enhancement backend
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::debug;

use super::error::OpenAiApiError;
use super::prompt::{build_user_prompt, SYSTEM_PROMPT};
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::domain::models::OpenAiConfig;
use crate::domain::ports::enhance::{self, EnhanceClient};

/// Configuration for the OpenAI client
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        let defaults = OpenAiConfig::default();
        Self {
            api_key: String::new(),
            base_url: defaults.base_url,
            model: defaults.model,
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

/// Enhancement client speaking the chat completions protocol.
///
/// One pooled `reqwest` client per instance; requests carry a bearer token
/// and time out after the configured number of seconds. No retries and no
/// rate limiting live here: a failed enhancement is reported to the caller,
/// who decides whether to re-invoke.
pub struct OpenAiClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,
    config: OpenAiClientConfig,
}

impl OpenAiClient {
    /// Creates a client with default settings and the given API key
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_config(OpenAiClientConfig {
            api_key,
            ..Default::default()
        })
    }

    /// Creates a client with custom configuration
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be built.
    pub fn with_config(config: OpenAiClientConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Builds a client from loaded settings.
    ///
    /// Returns `Ok(None)` when no API key is configured; the caller keeps the
    /// orchestrator unconfigured and enhancement requests fail fast with a
    /// missing-credential error instead of a doomed network call.
    ///
    /// # Errors
    /// Fails only if the HTTP client cannot be built.
    pub fn from_settings(settings: &OpenAiConfig) -> Result<Option<Self>> {
        let Some(api_key) = settings.api_key.clone() else {
            return Ok(None);
        };

        Self::with_config(OpenAiClientConfig {
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: settings.timeout_secs,
        })
        .map(Some)
    }

    async fn send_request(&self, request: &ChatRequest) -> Result<ChatResponse, OpenAiApiError> {
        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(OpenAiApiError::from_status(status, body));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiApiError::MalformedResponse(e.to_string()))?;

        Ok(chat_response)
    }
}

#[async_trait]
impl EnhanceClient for OpenAiClient {
    async fn enhance(&self, document: &str, instruction: &str) -> enhance::Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(document, instruction)),
            ],
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        let response = self.send_request(&request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "enhancement completed"
            );
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                OpenAiApiError::MalformedResponse(
                    "response contained no completion text".to_string(),
                )
            })?;

        Ok(content)
    }
}
