//! Outline schema validator
//!
//! Total parse from the model's raw JSON into the typed outline. This is a
//! gate, not a collector: the first violation aborts with enough coordinates
//! to locate it. On success, downstream consumers never observe a missing
//! `subtopics`/`points` sequence.

use serde_json::Value;

use mindgraph_types::{
    Complexity, CrossReference, Importance, MindMapOutline, OutlineMetadata, Point, Strength,
    Subtopic, Topic,
};

use crate::error::{snippet, GenerationError};

/// Validate a raw parsed reply and construct the typed outline.
pub fn validate_outline(raw: &Value) -> Result<MindMapOutline, GenerationError> {
    let topics_raw = match raw.get("topics").and_then(Value::as_array) {
        Some(topics) => topics,
        None => {
            return Err(GenerationError::InvalidResponse {
                snippet: snippet(raw),
            })
        }
    };

    let mut topics = Vec::with_capacity(topics_raw.len());
    for (i, topic_raw) in topics_raw.iter().enumerate() {
        topics.push(parse_topic(i, topic_raw)?);
    }

    let metadata = raw.get("metadata").and_then(parse_metadata);

    Ok(MindMapOutline { topics, metadata })
}

fn parse_topic(i: usize, raw: &Value) -> Result<Topic, GenerationError> {
    let invalid = || GenerationError::InvalidTopic {
        index: i,
        snippet: snippet(raw),
    };

    let title = non_empty_str(raw.get("title")).ok_or_else(invalid)?;
    let subtopics_raw = raw
        .get("subtopics")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    let mut subtopics = Vec::with_capacity(subtopics_raw.len());
    for (j, subtopic_raw) in subtopics_raw.iter().enumerate() {
        subtopics.push(parse_subtopic(i, j, subtopic_raw)?);
    }

    Ok(Topic {
        title: title.to_string(),
        description: opt_string(raw.get("description")),
        keywords: string_vec(raw.get("keywords")),
        subtopics,
        cross_references: cross_references(raw.get("crossReferences")),
    })
}

fn parse_subtopic(i: usize, j: usize, raw: &Value) -> Result<Subtopic, GenerationError> {
    let invalid = || GenerationError::InvalidSubtopic {
        topic: i,
        subtopic: j,
        snippet: snippet(raw),
    };

    let title = non_empty_str(raw.get("title")).ok_or_else(invalid)?;
    let points_raw = raw
        .get("points")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    let mut points = Vec::with_capacity(points_raw.len());
    for (k, point_raw) in points_raw.iter().enumerate() {
        points.push(parse_point(i, j, k, point_raw)?);
    }

    Ok(Subtopic {
        title: title.to_string(),
        description: opt_string(raw.get("description")),
        keywords: string_vec(raw.get("keywords")),
        importance: raw
            .get("importance")
            .and_then(|v| serde_json::from_value::<Importance>(v.clone()).ok()),
        points,
    })
}

fn parse_point(i: usize, j: usize, k: usize, raw: &Value) -> Result<Point, GenerationError> {
    let title = non_empty_str(raw.get("title")).ok_or(GenerationError::InvalidPoint {
        topic: i,
        subtopic: j,
        point: k,
        snippet: snippet(raw),
    })?;

    Ok(Point {
        title: title.to_string(),
        description: opt_string(raw.get("description")),
        keywords: string_vec(raw.get("keywords")),
        examples: string_vec(raw.get("examples")),
        citations: string_vec(raw.get("citations")),
        complexity: raw
            .get("complexity")
            .and_then(|v| serde_json::from_value::<Complexity>(v.clone()).ok()),
        subpoints: string_vec(raw.get("subpoints")),
    })
}

/// Optional metadata block - malformed metadata is dropped, not fatal.
fn parse_metadata(raw: &Value) -> Option<OutlineMetadata> {
    serde_json::from_value(raw.clone()).ok()
}

/// Cross-references are advisory: entries that do not fit the shape are
/// skipped rather than failing the whole outline.
fn cross_references(raw: Option<&Value>) -> Option<Vec<CrossReference>> {
    let entries = raw?.as_array()?;
    let refs: Vec<CrossReference> = entries
        .iter()
        .filter_map(|entry| {
            Some(CrossReference {
                target_topic: non_empty_str(entry.get("targetTopic"))?.to_string(),
                relationship: entry.get("relationship")?.as_str()?.to_string(),
                strength: entry
                    .get("strength")
                    .and_then(|v| serde_json::from_value::<Strength>(v.clone()).ok())
                    .unwrap_or(Strength::Moderate),
            })
        })
        .collect();
    if refs.is_empty() {
        None
    } else {
        Some(refs)
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn opt_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn string_vec(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
