use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmSettings;

/// Failures of a single call to the completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Invalid API key. Please check your GROQ_API_KEY configuration.")]
    Unauthorized,

    #[error("Rate limit exceeded. Please wait a moment and try again. (API response: {0})")]
    RateLimited(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Completion service is temporarily unavailable (status {0}). Please try again later.")]
    Unavailable(StatusCode),

    #[error("API error (status {status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to reach the completion service")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse chat completion response JSON")]
    Decode(#[source] reqwest::Error),
}

impl CompletionError {
    /// Whether a repeated attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CompletionError::Transport(_)
                | CompletionError::RateLimited(_)
                | CompletionError::Unavailable(_)
        )
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;
}

pub type DynLlmClient = dyn LlmClient;

#[derive(Debug, Clone)]
pub struct AIClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

impl AIClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(anyhow!("Refusing to build completion client without an API key"));
        }

        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_key: settings.api_key.clone(),
            user_agent: settings.user_agent.clone(),
        })
    }
}

#[async_trait]
impl LlmClient for AIClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = response.status();
        debug!(%status, "chat completion response received");

        match status {
            StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .map_err(CompletionError::Decode),
            StatusCode::UNAUTHORIZED => Err(CompletionError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => {
                Err(CompletionError::RateLimited(response.text().await.unwrap_or_default()))
            }
            StatusCode::BAD_REQUEST => {
                Err(CompletionError::BadRequest(response.text().await.unwrap_or_default()))
            }
            status if status.is_server_error() => Err(CompletionError::Unavailable(status)),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(CompletionError::Api { status, body })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message as returned by the service. `content` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
