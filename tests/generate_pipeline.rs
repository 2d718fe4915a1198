//! End-to-end pipeline tests with a scripted chat client
//!
//! Exercises the full caller-facing flow: settings merge, prompt merge,
//! generation, validation, graph build, document assembly, persistence.

use std::sync::Arc;

use async_trait::async_trait;

use mindgraph::{
    ChatCompletionClient, DocumentTextExtractor, GenerationError, InMemoryStore, MindMapService,
};
use mindgraph_agentic::ChatParams;
use mindgraph_types::{EdgeKind, NodeTier, SettingsOverrides};

/// Chat client returning a canned reply
struct ScriptedClient {
    reply: String,
}

impl ScriptedClient {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl ChatCompletionClient for ScriptedClient {
    async fn chat(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _params: &ChatParams,
    ) -> Result<String, GenerationError> {
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "scripted"
    }

    fn provider_name(&self) -> &str {
        "Scripted"
    }
}

const OUTLINE_REPLY: &str = r#"```json
{
    "topics": [
        {
            "title": "Optics",
            "description": "Lenses and light",
            "subtopics": [
                {
                    "title": "Refraction",
                    "importance": "high",
                    "points": [
                        {
                            "title": "Snell's law",
                            "complexity": "intermediate",
                            "subpoints": ["Angle ratios", "Index of refraction"]
                        }
                    ]
                }
            ],
            "crossReferences": [
                {
                    "targetTopic": "Astronomy",
                    "relationship": "enables observation",
                    "strength": "strong"
                }
            ]
        },
        {
            "title": "Astronomy",
            "subtopics": []
        }
    ]
}
```"#;

fn service_with(reply: &str, store: Arc<InMemoryStore>) -> MindMapService {
    MindMapService::new(ScriptedClient::new(reply), store, "user-42")
}

#[tokio::test]
async fn generate_produces_complete_document() {
    let store = Arc::new(InMemoryStore::new());
    let service = service_with(OUTLINE_REPLY, store.clone());

    let document = service
        .generate("history of the telescope", None, None)
        .await
        .unwrap();

    // 1 root + 2 topics + 1 subtopic + 1 point + 2 subpoints
    assert_eq!(document.nodes.len(), 7);
    assert_eq!(document.edges.len(), 6);
    assert_eq!(document.title, "history of the telescope");
    assert_eq!(document.prompt, "history of the telescope");
    assert_eq!(document.owner_id, "user-42");
    assert_eq!(document.metadata.version, "2.0");
    assert_eq!(document.created_at, document.updated_at);

    let root = document
        .nodes
        .iter()
        .find(|n| n.tier == NodeTier::Root)
        .unwrap();
    assert_eq!(root.label, "history of the telescope");
}

#[tokio::test]
async fn cross_references_honored_when_enabled() {
    let service = service_with(OUTLINE_REPLY, Arc::new(InMemoryStore::new()));
    let document = service
        .generate(
            "telescopes",
            None,
            Some(SettingsOverrides {
                cross_topic_relations: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

    let cross: Vec<_> = document
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::CrossReference)
        .collect();
    assert_eq!(cross.len(), 1);
    assert_eq!(cross[0].id, "cross-edge-0-1");
    assert_eq!(cross[0].relationship.as_deref(), Some("enables observation"));
}

#[tokio::test]
async fn document_text_merged_into_root_label() {
    let service = service_with(OUTLINE_REPLY, Arc::new(InMemoryStore::new()));
    let document = service
        .generate("summarize this", Some("Galileo's notebooks"), None)
        .await
        .unwrap();

    let root = document
        .nodes
        .iter()
        .find(|n| n.tier == NodeTier::Root)
        .unwrap();
    assert!(root.label.contains("Galileo's notebooks"));
    assert!(root.label.ends_with("summarize this"));
    // document title stays the bare prompt
    assert_eq!(document.title, "summarize this");
}

#[tokio::test]
async fn invalid_outline_aborts_without_a_document() {
    let store = Arc::new(InMemoryStore::new());
    let service = service_with(r#"{"topics": [{"title": "x"}]}"#, store.clone());

    let err = service.generate("anything", None, None).await.unwrap_err();
    assert_eq!(err.kind(), "invalid_topic");
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn save_persists_through_the_store() {
    let store = Arc::new(InMemoryStore::new());
    let service = service_with(OUTLINE_REPLY, store.clone());

    let document = service.generate("optics", None, None).await.unwrap();
    service.save(&document).await.unwrap();

    let saved = store.list().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, document.id);
}

#[tokio::test]
async fn extraction_failure_surfaces_as_document_extraction_error() {
    struct FailingExtractor;

    #[async_trait]
    impl DocumentTextExtractor for FailingExtractor {
        async fn extract_text(
            &self,
            _file_name: &str,
            _bytes: &[u8],
        ) -> Result<String, GenerationError> {
            Err(GenerationError::DocumentExtraction(
                "unsupported format".into(),
            ))
        }
    }

    let service = service_with(OUTLINE_REPLY, Arc::new(InMemoryStore::new()));
    let err = service
        .generate_from_document("summarize", &FailingExtractor, "notes.pdf", b"%PDF", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "document_extraction_error");
}

#[tokio::test]
async fn settings_reach_the_request_params() {
    struct ParamCapture {
        reply: String,
        seen: std::sync::Mutex<Vec<ChatParams>>,
    }

    #[async_trait]
    impl ChatCompletionClient for ParamCapture {
        async fn chat(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            params: &ChatParams,
        ) -> Result<String, GenerationError> {
            self.seen.lock().unwrap().push(*params);
            Ok(self.reply.clone())
        }

        fn model_name(&self) -> &str {
            "capture"
        }

        fn provider_name(&self) -> &str {
            "Capture"
        }
    }

    let client = Arc::new(ParamCapture {
        reply: OUTLINE_REPLY.to_string(),
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let service = MindMapService::new(
        client.clone(),
        Arc::new(InMemoryStore::new()),
        "user-42",
    );

    service
        .generate(
            "optics",
            None,
            Some(SettingsOverrides {
                temperature: Some(2.0), // clamped to 1.0 before the request
                max_tokens: Some(4000),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].temperature, 1.0);
    assert_eq!(seen[0].max_tokens, 4000);
}
