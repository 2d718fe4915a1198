//! Fixed per-tier styling
//!
//! Visual weight decreases down the hierarchy: root > topic > subtopic >
//! point > subpoint. Cross-reference edges are dashed, translucent, and
//! animated to read as non-structural.

use mindgraph_types::{EdgeStyle, NodeStyle, NodeTier};

/// Node fill/border/type-size for a tier
pub fn node_style(tier: NodeTier) -> NodeStyle {
    let (background, border, font_size) = match tier {
        NodeTier::Root => ("#4F46E5", "#4338CA", 16),
        NodeTier::Topic => ("#3B82F6", "#2563EB", 14),
        NodeTier::Subtopic => ("#60A5FA", "#3B82F6", 12),
        NodeTier::Point => ("#93C5FD", "#60A5FA", 11),
        NodeTier::Subpoint => ("#BFDBFE", "#93C5FD", 10),
    };
    NodeStyle {
        background_color: background.to_string(),
        border_color: border.to_string(),
        font_size,
    }
}

/// Hierarchy edge stroke, keyed by the child node's tier
pub fn hierarchy_edge_style(child_tier: NodeTier) -> EdgeStyle {
    let (stroke, stroke_width) = match child_tier {
        NodeTier::Root | NodeTier::Topic => ("#6366F1", 2.0),
        NodeTier::Subtopic => ("#60A5FA", 1.5),
        NodeTier::Point => ("#93C5FD", 1.0),
        NodeTier::Subpoint => ("#BFDBFE", 1.0),
    };
    EdgeStyle {
        stroke: stroke.to_string(),
        stroke_width,
        stroke_dasharray: None,
        opacity: None,
    }
}

/// Cross-reference edge stroke
pub fn cross_reference_edge_style() -> EdgeStyle {
    EdgeStyle {
        stroke: "#94A3B8".to_string(),
        stroke_width: 1.0,
        stroke_dasharray: Some("5 5".to_string()),
        opacity: Some(0.6),
    }
}
