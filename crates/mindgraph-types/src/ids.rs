//! Deterministic node and edge identifiers
//!
//! The ID scheme is part of the contract: indices are zero-based positions
//! within the immediate parent's sequence, so a given outline always produces
//! the same graph IDs.

/// The single root node ID
pub const ROOT_ID: &str = "root";

pub fn topic_id(i: usize) -> String {
    format!("topic-{i}")
}

pub fn subtopic_id(i: usize, j: usize) -> String {
    format!("subtopic-{i}-{j}")
}

pub fn point_id(i: usize, j: usize, k: usize) -> String {
    format!("point-{i}-{j}-{k}")
}

pub fn subpoint_id(i: usize, j: usize, k: usize, m: usize) -> String {
    format!("subpoint-{i}-{j}-{k}-{m}")
}

/// Hierarchy edge between a parent node and its direct child
pub fn hierarchy_edge_id(parent_id: &str, child_id: &str) -> String {
    format!("edge-{parent_id}-{child_id}")
}

/// Cross-reference edge between two topics, by topic index
pub fn cross_edge_id(source_topic: usize, target_topic: usize) -> String {
    format!("cross-edge-{source_topic}-{target_topic}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_scheme() {
        assert_eq!(topic_id(0), "topic-0");
        assert_eq!(subtopic_id(0, 1), "subtopic-0-1");
        assert_eq!(point_id(2, 0, 3), "point-2-0-3");
        assert_eq!(subpoint_id(0, 0, 0, 1), "subpoint-0-0-0-1");
    }

    #[test]
    fn test_edge_id_scheme() {
        assert_eq!(hierarchy_edge_id(ROOT_ID, "topic-0"), "edge-root-topic-0");
        assert_eq!(
            hierarchy_edge_id("point-0-0-0", "subpoint-0-0-0-1"),
            "edge-point-0-0-0-subpoint-0-0-0-1"
        );
        assert_eq!(cross_edge_id(1, 4), "cross-edge-1-4");
    }
}
