//! Chat completion client
//!
//! Client abstraction over the chat-completion HTTP endpoint, plus the
//! Deepseek implementation. One outbound call per generation; the await on
//! the response is the pipeline's only suspension point.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::GenerationError;

/// Default Deepseek model
const DEFAULT_MODEL: &str = "deepseek-chat";

const API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Per-request sampling parameters taken from the generation settings
#[derive(Debug, Clone, Copy)]
pub struct ChatParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Abstraction over a chat-completion service.
///
/// Returns the assistant's raw message text; the pipeline owns fence
/// stripping, parsing, and validation.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &ChatParams,
    ) -> Result<String, GenerationError>;

    fn model_name(&self) -> &str;

    fn provider_name(&self) -> &str;
}

/// Deepseek API client
#[derive(Clone)]
pub struct DeepseekClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl DeepseekClient {
    /// Create a new client with the given API key
    pub fn new(api_key: String) -> Self {
        let model = std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }

    /// Create with a specific model
    pub fn with_model(api_key: String, model: &str) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("DEEPSEEK_API_KEY").map_err(|_| {
            GenerationError::Transport("DEEPSEEK_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key))
    }
}

#[async_trait]
impl ChatCompletionClient for DeepseekClient {
    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &ChatParams,
    ) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "model": &self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": 0.95,
            "frequency_penalty": 0.5,
            "presence_penalty": 0.5,
        });

        tracing::debug!(model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(transport_error(status.as_u16(), &body));
        }

        let reply: Value = response.json().await?;
        extract_message_content(&reply)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "Deepseek"
    }
}

/// Build a `Transport` error from a non-success reply, preferring the
/// remote `error.message` when the body parses.
fn transport_error(status: u16, body: &str) -> GenerationError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| "failed to generate mind map content".to_string());
    GenerationError::Transport(format!("API error {status}: {message}"))
}

/// Pull `choices[0].message.content` out of a chat completion reply.
pub(crate) fn extract_message_content(reply: &Value) -> Result<String, GenerationError> {
    reply
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(GenerationError::MalformedReply)
}
