//! mindgraph - LLM mind-map generation pipeline
//!
//! Turns a free-text prompt (optionally merged with text extracted from a
//! document) into a positioned mind-map graph:
//!
//! ```text
//! prompt ──► MindMapService::generate
//!               │  settings merge + clamp
//!               ▼
//!        mindgraph-agentic (prompt → chat call → validate)
//!               │  MindMapOutline
//!               ▼
//!        mindgraph-graph (radial layout, IDs, styles)
//!               │  MindMapGraph
//!               ▼
//!        MindMapDocument (metadata, timestamps) ──► MindMapStore
//! ```
//!
//! The service holds no state between calls; every generation produces a
//! fresh, independent document. Errors are structured
//! ([`GenerationError`]) and terminal - a failure at any stage aborts the
//! whole call, never yielding a partial graph.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use mindgraph_types::{DocumentMetadata, GenerationSettings, MindMapDocument, SettingsOverrides};

pub use mindgraph_agentic::{
    ChatCompletionClient, DeepseekClient, GenerationError, OutlineGenerator,
};
pub use mindgraph_graph::build_graph;
pub use mindgraph_types as types;

// =============================================================================
// EXTERNAL COLLABORATOR SEAMS
// =============================================================================

/// Document-text extraction collaborator.
///
/// The pipeline itself only ever sees the extracted string; implementations
/// live outside this crate. Failures surface as
/// [`GenerationError::DocumentExtraction`].
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract_text(&self, file_name: &str, bytes: &[u8])
        -> Result<String, GenerationError>;
}

/// Persistence collaborator. The pipeline hands it a fully-built document;
/// the storage schema beyond that shape is the store's concern.
#[async_trait]
pub trait MindMapStore: Send + Sync {
    async fn save(&self, document: &MindMapDocument) -> anyhow::Result<()>;
}

/// In-process store used by tests and the CLI's dry-run mode.
#[derive(Default)]
pub struct InMemoryStore {
    documents: RwLock<Vec<MindMapDocument>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<MindMapDocument> {
        self.documents.read().await.clone()
    }
}

#[async_trait]
impl MindMapStore for InMemoryStore {
    async fn save(&self, document: &MindMapDocument) -> anyhow::Result<()> {
        self.documents.write().await.push(document.clone());
        Ok(())
    }
}

// =============================================================================
// PROMPT MERGING
// =============================================================================

/// Merge extracted document text ahead of the user's prompt.
///
/// The document content is quoted as context; the user's instruction stays
/// last so the model treats it as the actual request.
pub fn merge_document_text(document_text: &str, prompt: &str) -> String {
    format!(
        "Using the following document content as context:\n\n{}\n\n{}",
        document_text.trim(),
        prompt
    )
}

// =============================================================================
// SERVICE
// =============================================================================

/// Caller-facing entry point for the generation pipeline.
pub struct MindMapService {
    generator: OutlineGenerator,
    store: Arc<dyn MindMapStore>,
    owner_id: String,
}

impl MindMapService {
    pub fn new(
        client: Arc<dyn ChatCompletionClient>,
        store: Arc<dyn MindMapStore>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            generator: OutlineGenerator::with_client(client),
            store,
            owner_id: owner_id.into(),
        }
    }

    /// Create with a Deepseek client configured from the environment.
    pub fn from_env(
        store: Arc<dyn MindMapStore>,
        owner_id: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let client = Arc::new(DeepseekClient::from_env()?);
        Ok(Self::new(client, store, owner_id))
    }

    /// Generate a mind map for `prompt`.
    ///
    /// `document_text`, when present, is pre-extracted text merged ahead of
    /// the prompt. `overrides` are merged over the documented defaults and
    /// clamped before anything downstream sees them.
    pub async fn generate(
        &self,
        prompt: &str,
        document_text: Option<&str>,
        overrides: Option<SettingsOverrides>,
    ) -> Result<MindMapDocument, GenerationError> {
        let settings = overrides.unwrap_or_default().into_settings().clamped();

        let final_prompt = match document_text {
            Some(text) => merge_document_text(text, prompt),
            None => prompt.to_string(),
        };

        let started = Instant::now();
        let outline = self.generator.generate(&final_prompt, &settings).await?;
        let generation_time_ms = started.elapsed().as_millis() as u64;

        let graph = build_graph(&outline, &final_prompt, &settings);

        // metadata is back-filled by the generator
        let outline_meta = outline.metadata.unwrap_or_default();
        let now = Utc::now();
        let document = MindMapDocument {
            id: Uuid::new_v4(),
            title: prompt.to_string(),
            prompt: prompt.to_string(),
            nodes: graph.nodes,
            edges: graph.edges,
            owner_id: self.owner_id.clone(),
            created_at: now,
            updated_at: now,
            settings: Some(settings),
            metadata: DocumentMetadata::from_outline(&outline_meta, generation_time_ms),
        };

        tracing::info!(
            id = %document.id,
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            elapsed_ms = generation_time_ms,
            "mind map generated"
        );
        Ok(document)
    }

    /// Generate from an uploaded document, extracting its text first.
    pub async fn generate_from_document(
        &self,
        prompt: &str,
        extractor: &dyn DocumentTextExtractor,
        file_name: &str,
        bytes: &[u8],
        overrides: Option<SettingsOverrides>,
    ) -> Result<MindMapDocument, GenerationError> {
        let text = extractor.extract_text(file_name, bytes).await?;
        self.generate(prompt, Some(&text), overrides).await
    }

    /// Persist a generated document through the configured store.
    pub async fn save(&self, document: &MindMapDocument) -> anyhow::Result<()> {
        self.store.save(document).await
    }

    /// Settings as the pipeline would actually use them, for display.
    pub fn effective_settings(overrides: Option<SettingsOverrides>) -> GenerationSettings {
        overrides.unwrap_or_default().into_settings().clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_document_text_keeps_prompt_last() {
        let merged = merge_document_text("  cell biology notes  ", "summarize the key ideas");
        assert!(merged.starts_with("Using the following document content"));
        assert!(merged.contains("cell biology notes"));
        assert!(merged.ends_with("summarize the key ideas"));
    }

    #[test]
    fn test_effective_settings_merges_and_clamps() {
        let settings = MindMapService::effective_settings(Some(SettingsOverrides {
            max_topics: Some(500),
            temperature: Some(-1.0),
            ..Default::default()
        }));
        assert_eq!(settings.max_topics, 100);
        assert_eq!(settings.temperature, 0.0);
    }

    #[tokio::test]
    async fn test_in_memory_store_round_trip() {
        let store = InMemoryStore::new();
        assert!(store.list().await.is_empty());

        let now = Utc::now();
        let document = MindMapDocument {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            prompt: "t".to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            owner_id: "owner".to_string(),
            created_at: now,
            updated_at: now,
            settings: None,
            metadata: DocumentMetadata::from_outline(
                &mindgraph_types::OutlineMetadata::default(),
                0,
            ),
        };
        store.save(&document).await.unwrap();

        let listed = store.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, document.id);
    }
}
