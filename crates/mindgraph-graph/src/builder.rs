//! Graph builder
//!
//! Walks a validated outline and emits the flat node/edge lists with layout
//! positions, deterministic IDs, and per-tier styling. Pure given its
//! inputs: no I/O, never mutates the outline, and the returned graph is a
//! fresh independent value.
//!
//! The outline tree has a fixed depth of four tiers, so the walk is a set
//! of bounded nested loops rather than open recursion.

use mindgraph_types::ids::{
    cross_edge_id, hierarchy_edge_id, point_id, subpoint_id, subtopic_id, topic_id, ROOT_ID,
};
use mindgraph_types::{
    Complexity, EdgeKind, GenerationSettings, Importance, MindMapEdge, MindMapGraph, MindMapNode,
    MindMapOutline, NodeDetails, NodeTier, Position,
};

use crate::layout::node_position;
use crate::style::{cross_reference_edge_style, hierarchy_edge_style, node_style};

/// Build the positioned graph for a validated outline.
///
/// `root_label` is the original prompt (or merged prompt + document text).
/// Cross-reference edges are only emitted when `cross_topic_relations` is
/// enabled; a reference whose target title matches no topic is dropped
/// silently - the model may name a topic that does not exist.
pub fn build_graph(
    outline: &MindMapOutline,
    root_label: &str,
    settings: &GenerationSettings,
) -> MindMapGraph {
    let mut graph = MindMapGraph::default();

    graph.nodes.push(MindMapNode {
        id: ROOT_ID.to_string(),
        tier: NodeTier::Root,
        label: root_label.to_string(),
        description: Some("Root topic".to_string()),
        details: None,
        position: Position::ZERO,
        style: node_style(NodeTier::Root),
    });

    let topic_count = outline.topics.len();
    for (i, topic) in outline.topics.iter().enumerate() {
        let topic_id = topic_id(i);
        push_node(
            &mut graph,
            &topic_id,
            NodeTier::Topic,
            &topic.title,
            topic.description.as_deref(),
            NodeDetails {
                keywords: topic.keywords.clone(),
                importance: Some(Importance::High),
                ..Default::default()
            },
            node_position(1, i, topic_count),
        );
        push_hierarchy_edge(&mut graph, ROOT_ID, &topic_id, NodeTier::Topic);

        let subtopic_count = topic.subtopics.len();
        for (j, subtopic) in topic.subtopics.iter().enumerate() {
            let subtopic_id = subtopic_id(i, j);
            push_node(
                &mut graph,
                &subtopic_id,
                NodeTier::Subtopic,
                &subtopic.title,
                subtopic.description.as_deref(),
                NodeDetails {
                    keywords: subtopic.keywords.clone(),
                    importance: Some(subtopic.importance.unwrap_or(Importance::Medium)),
                    ..Default::default()
                },
                node_position(2, j, subtopic_count),
            );
            push_hierarchy_edge(&mut graph, &topic_id, &subtopic_id, NodeTier::Subtopic);

            let point_count = subtopic.points.len();
            for (k, point) in subtopic.points.iter().enumerate() {
                let point_id = point_id(i, j, k);
                push_node(
                    &mut graph,
                    &point_id,
                    NodeTier::Point,
                    &point.title,
                    point.description.as_deref(),
                    NodeDetails {
                        keywords: point.keywords.clone(),
                        examples: point.examples.clone().unwrap_or_default(),
                        citations: point.citations.clone().unwrap_or_default(),
                        complexity: Some(point.complexity.unwrap_or(Complexity::Basic)),
                        ..Default::default()
                    },
                    node_position(3, k, point_count),
                );
                push_hierarchy_edge(&mut graph, &subtopic_id, &point_id, NodeTier::Point);

                let subpoints = point.subpoints.as_deref().unwrap_or_default();
                for (m, subpoint) in subpoints.iter().enumerate() {
                    let subpoint_id = subpoint_id(i, j, k, m);
                    graph.nodes.push(MindMapNode {
                        id: subpoint_id.clone(),
                        tier: NodeTier::Subpoint,
                        label: subpoint.clone(),
                        description: None,
                        details: None,
                        position: node_position(4, m, subpoints.len()),
                        style: node_style(NodeTier::Subpoint),
                    });
                    push_hierarchy_edge(&mut graph, &point_id, &subpoint_id, NodeTier::Subpoint);
                }
            }
        }
    }

    if settings.cross_topic_relations {
        add_cross_reference_edges(&mut graph, outline);
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph built"
    );
    graph
}

#[allow(clippy::too_many_arguments)]
fn push_node(
    graph: &mut MindMapGraph,
    id: &str,
    tier: NodeTier,
    label: &str,
    description: Option<&str>,
    details: NodeDetails,
    position: Position,
) {
    graph.nodes.push(MindMapNode {
        id: id.to_string(),
        tier,
        label: label.to_string(),
        description: Some(description.unwrap_or_default().to_string()),
        details: Some(details),
        position,
        style: node_style(tier),
    });
}

fn push_hierarchy_edge(graph: &mut MindMapGraph, parent: &str, child: &str, child_tier: NodeTier) {
    graph.edges.push(MindMapEdge {
        id: hierarchy_edge_id(parent, child),
        source: parent.to_string(),
        target: child.to_string(),
        kind: EdgeKind::Hierarchy,
        label: None,
        relationship: None,
        strength: None,
        animated: false,
        style: hierarchy_edge_style(child_tier),
    });
}

/// Resolve declared cross references by exact title match against the topic
/// list; first match in array order wins when titles collide.
fn add_cross_reference_edges(graph: &mut MindMapGraph, outline: &MindMapOutline) {
    for (i, topic) in outline.topics.iter().enumerate() {
        let Some(refs) = &topic.cross_references else {
            continue;
        };
        for reference in refs {
            let Some(j) = outline
                .topics
                .iter()
                .position(|t| t.title == reference.target_topic)
            else {
                tracing::debug!(
                    source = i,
                    target = %reference.target_topic,
                    "dropping cross reference to unknown topic"
                );
                continue;
            };
            graph.edges.push(MindMapEdge {
                id: cross_edge_id(i, j),
                source: topic_id(i),
                target: topic_id(j),
                kind: EdgeKind::CrossReference,
                label: Some(reference.relationship.clone()),
                relationship: Some(reference.relationship.clone()),
                strength: Some(reference.strength),
                animated: true,
                style: cross_reference_edge_style(),
            });
        }
    }
}
