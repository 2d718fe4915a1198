//! Validated outline tree
//!
//! The model's structured answer: exactly four tiers below an implicit root,
//! `Topic → Subtopic → Point → subpoint (string)`. Values of these types only
//! exist after schema validation, so `subtopics` and `points` are always
//! present (possibly empty) - their absence is a validation failure upstream,
//! never an empty default here.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCALE ENUMS
// =============================================================================

/// Subtopic importance declared by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Content complexity declared by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

/// Cross-reference strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

// =============================================================================
// OUTLINE TREE
// =============================================================================

/// A declared relationship between two topics, resolved by title at
/// graph-build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_topic: String,
    pub relationship: String,
    pub strength: Strength,
}

/// Leaf-bearing detail node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpoints: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub subtopics: Vec<Subtopic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_references: Option<Vec<CrossReference>>,
}

/// Outline-level metadata block. Back-filled with these defaults when the
/// model omits it: intermediate / 0 / [] / [].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineMetadata {
    pub complexity: Complexity,
    #[serde(default)]
    pub estimated_reading_time: u32,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub suggested_readings: Vec<String>,
}

impl Default for OutlineMetadata {
    fn default() -> Self {
        Self {
            complexity: Complexity::Intermediate,
            estimated_reading_time: 0,
            key_takeaways: Vec::new(),
            suggested_readings: Vec::new(),
        }
    }
}

/// The validated hierarchical result of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapOutline {
    pub topics: Vec<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OutlineMetadata>,
}
