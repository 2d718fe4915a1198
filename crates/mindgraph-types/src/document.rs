//! Stored mind-map document
//!
//! What the caller hands to the document store: the fully-built graph plus
//! provenance (prompt, settings, ownership) and generation metadata. The
//! storage schema beyond this shape is the store's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::{MindMapEdge, MindMapNode};
use crate::outline::{Complexity, OutlineMetadata};
use crate::settings::GenerationSettings;

/// Document format version written by this pipeline
pub const DOCUMENT_VERSION: &str = "2.0";

/// Generation metadata persisted alongside the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub complexity: Complexity,
    pub estimated_reading_time: u32,
    pub key_takeaways: Vec<String>,
    pub suggested_readings: Vec<String>,
    pub version: String,
    /// Wall-clock duration of the generation call, in milliseconds
    pub generation_time_ms: u64,
}

impl DocumentMetadata {
    /// Merge the outline's metadata block (already back-filled by the
    /// pipeline) with document-level fields.
    pub fn from_outline(outline_meta: &OutlineMetadata, generation_time_ms: u64) -> Self {
        Self {
            complexity: outline_meta.complexity,
            estimated_reading_time: outline_meta.estimated_reading_time,
            key_takeaways: outline_meta.key_takeaways.clone(),
            suggested_readings: outline_meta.suggested_readings.clone(),
            version: DOCUMENT_VERSION.to_string(),
            generation_time_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapDocument {
    pub id: Uuid,
    pub title: String,
    pub prompt: String,
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<GenerationSettings>,
    pub metadata: DocumentMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_from_outline() {
        let outline_meta = OutlineMetadata {
            complexity: Complexity::Advanced,
            estimated_reading_time: 20,
            key_takeaways: vec!["a".into()],
            suggested_readings: vec![],
        };
        let meta = DocumentMetadata::from_outline(&outline_meta, 1234);
        assert_eq!(meta.complexity, Complexity::Advanced);
        assert_eq!(meta.estimated_reading_time, 20);
        assert_eq!(meta.version, DOCUMENT_VERSION);
        assert_eq!(meta.generation_time_ms, 1234);
    }
}
