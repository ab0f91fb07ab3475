//! Text completion client
//!
//! [`CompletionClient`] is the seam between the generator and the external
//! LLM service. [`OpenAiClient`] talks to an OpenAI-compatible HTTP API in
//! either the legacy completion or the chat style. Errors are returned as-is;
//! there is no retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::{ApiStyle, CompletionConfig};
use crate::error::{AppError, Result};
use crate::logging::log_completion_call;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Complete `prompt` and return the first choice, trimmed
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    style: ApiStyle,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct LegacyRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct LegacyChoice {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct LegacyResponse {
    #[serde(default)]
    choices: Vec<LegacyChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            style: config.api_style,
            client,
        })
    }

    fn endpoint(&self) -> String {
        match self.style {
            ApiStyle::Legacy => format!("{}/v1/completions", self.base_url),
            ApiStyle::Chat => format!("{}/v1/chat/completions", self.base_url),
        }
    }

    async fn send(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key);

        let request = match self.style {
            ApiStyle::Legacy => request.json(&LegacyRequest {
                model: &self.model,
                prompt,
                max_tokens,
            }),
            ApiStyle::Chat => request.json(&ChatRequest {
                model: &self.model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
                max_tokens,
            }),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Completion(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Completion(format!("failed to read response: {}", e)))?;

        parse_first_choice(self.style, &body)
    }
}

/// Pull the first choice out of a response body
fn parse_first_choice(style: ApiStyle, body: &str) -> Result<String> {
    let text = match style {
        ApiStyle::Legacy => {
            let parsed: LegacyResponse = serde_json::from_str(body)
                .map_err(|e| AppError::Completion(format!("malformed response: {}", e)))?;
            parsed.choices.into_iter().next().map(|c| c.text)
        }
        ApiStyle::Chat => {
            let parsed: ChatResponse = serde_json::from_str(body)
                .map_err(|e| AppError::Completion(format!("malformed response: {}", e)))?;
            match parsed.choices.into_iter().next() {
                Some(choice) => Some(choice.message.content.ok_or_else(|| {
                    AppError::Completion("response choice had no content".to_string())
                })?),
                None => None,
            }
        }
    };

    text.map(|t| t.trim().to_string())
        .ok_or_else(|| AppError::Completion("response contained no choices".to_string()))
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let start = Instant::now();
        let result = self.send(prompt, max_tokens).await;
        log_completion_call(
            &self.model,
            prompt.len(),
            max_tokens,
            start.elapsed().as_millis() as u64,
            &result,
        );
        result
    }
}
