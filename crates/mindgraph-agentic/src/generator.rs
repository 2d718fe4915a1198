//! Outline generator
//!
//! Orchestrates one generation: system prompt → chat call → fence stripping
//! → JSON parse → schema validation → metadata backfill. Errors at any stage
//! abort the whole call; the caller never sees a partial outline.

use std::sync::Arc;

use mindgraph_types::{GenerationSettings, MindMapOutline, OutlineMetadata};

use crate::client::{ChatCompletionClient, ChatParams};
use crate::error::GenerationError;
use crate::prompt::build_system_prompt;
use crate::validator::validate_outline;

/// Outline generator backed by a chat-completion client
pub struct OutlineGenerator {
    client: Arc<dyn ChatCompletionClient>,
}

impl OutlineGenerator {
    /// Create with a specific chat client
    pub fn with_client(client: Arc<dyn ChatCompletionClient>) -> Self {
        Self { client }
    }

    /// Generate and validate an outline for `prompt`.
    ///
    /// `settings` must already be merged and clamped. Exactly one outbound
    /// call is made regardless of `multiple_ai_calls`.
    pub async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<MindMapOutline, GenerationError> {
        let system_prompt = build_system_prompt(settings);
        let params = ChatParams {
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        tracing::info!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            "requesting outline generation"
        );

        let content = self.client.chat(&system_prompt, prompt, &params).await?;
        let cleaned = strip_code_fences(&content);

        tracing::debug!(len = cleaned.len(), "parsing reply content");
        let raw: serde_json::Value = serde_json::from_str(cleaned)?;

        let mut outline = validate_outline(&raw)?;
        if outline.metadata.is_none() {
            outline.metadata = Some(OutlineMetadata::default());
        }

        tracing::info!(topics = outline.topics.len(), "outline validated");
        Ok(outline)
    }
}

/// Strip Markdown code-fence wrapping from the reply text.
///
/// Handles ```json fenced and bare ``` fenced content; unfenced input is
/// returned unchanged, so the operation is idempotent.
pub fn strip_code_fences(content: &str) -> &str {
    if let Some(after) = content.split_once("```json").map(|(_, rest)| rest) {
        after.split("```").next().unwrap_or(after).trim()
    } else if let Some(after) = content.split_once("```").map(|(_, rest)| rest) {
        after.split("```").next().unwrap_or(after).trim()
    } else {
        content.trim()
    }
}
