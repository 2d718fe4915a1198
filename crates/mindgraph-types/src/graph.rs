//! Positioned graph contracts
//!
//! The flat node/edge representation derived from an outline, annotated with
//! layout positions and per-tier styling, ready for rendering. Built once per
//! generation and otherwise immutable.
//!
//! Styles are plain data (hex colors, widths) so the crate stays free of any
//! UI toolkit - the rendering surface decides how to interpret them.

use serde::{Deserialize, Serialize};

use crate::outline::{Complexity, Importance, Strength};

// =============================================================================
// TIERS
// =============================================================================

/// One of the five levels in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTier {
    Root,
    Topic,
    Subtopic,
    Point,
    Subpoint,
}

impl NodeTier {
    /// Numeric depth used by the layout engine (root = 0).
    pub fn depth(&self) -> usize {
        match self {
            NodeTier::Root => 0,
            NodeTier::Topic => 1,
            NodeTier::Subtopic => 2,
            NodeTier::Point => 3,
            NodeTier::Subpoint => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeTier::Root => "root",
            NodeTier::Topic => "topic",
            NodeTier::Subtopic => "subtopic",
            NodeTier::Point => "point",
            NodeTier::Subpoint => "subpoint",
        }
    }
}

// =============================================================================
// GEOMETRY & STYLE
// =============================================================================

/// Plane coordinate (canvas units, root at origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fixed per-tier node styling (hex colors)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background_color: String,
    pub border_color: String,
    pub font_size: u32,
}

/// Edge stroke styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

// =============================================================================
// NODES & EDGES
// =============================================================================

/// Optional detail payload carried on topic/subtopic/point nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    /// Unique across the whole graph, per the deterministic ID scheme
    pub id: String,
    pub tier: NodeTier,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<NodeDetails>,
    pub position: Position,
    pub style: NodeStyle,
}

/// Edge classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Hierarchy,
    CrossReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    pub animated: bool,
    pub style: EdgeStyle,
}

/// The flat, positioned graph returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MindMapGraph {
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
}

impl MindMapGraph {
    pub fn node(&self, id: &str) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn hierarchy_edge_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Hierarchy)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_depths() {
        assert_eq!(NodeTier::Root.depth(), 0);
        assert_eq!(NodeTier::Topic.depth(), 1);
        assert_eq!(NodeTier::Subpoint.depth(), 4);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(NodeTier::Subtopic).unwrap(),
            serde_json::json!("subtopic")
        );
        assert_eq!(
            serde_json::to_value(EdgeKind::CrossReference).unwrap(),
            serde_json::json!("cross_reference")
        );
    }

    #[test]
    fn test_position_finite() {
        assert!(Position::new(1.0, -2.5).is_finite());
        assert!(!Position::new(f32::NAN, 0.0).is_finite());
    }
}
