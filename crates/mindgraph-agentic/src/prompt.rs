//! System prompt synthesizer
//!
//! Builds the instruction string for the chat service from the generation
//! settings. Pure and total - every branch has a default. The embedded JSON
//! example is the schema the validator enforces downstream; the surrounding
//! prose is advisory only.

use mindgraph_types::{GenerationSettings, PromptStyle, TopicDepth};

/// Advisory topic-count range for the given tree shape
fn topic_range(depth: TopicDepth) -> &'static str {
    match depth {
        TopicDepth::Broad => "5-8",
        TopicDepth::Deep => "3-4",
        TopicDepth::Balanced => "4-6",
    }
}

/// Advisory subtopic-count range - inverse of the topic range
fn subtopic_range(depth: TopicDepth) -> &'static str {
    match depth {
        TopicDepth::Broad => "2-3",
        TopicDepth::Deep => "4-6",
        TopicDepth::Balanced => "3-4",
    }
}

fn style_guidelines(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Academic => "Use formal language and include citations where relevant.",
        PromptStyle::Professional => {
            "Use clear, business-oriented language with practical examples."
        }
        PromptStyle::Creative => "Use engaging, creative language with innovative connections.",
    }
}

/// Build the system prompt for one generation call.
///
/// The settings are expected to be clamped already; the ranges and counts
/// embedded here are steering text, not locally enforced constraints.
pub fn build_system_prompt(settings: &GenerationSettings) -> String {
    let topic_range = topic_range(settings.topic_depth);
    let subtopic_range = subtopic_range(settings.topic_depth);
    let style_guidelines = style_guidelines(settings.style);

    let language_guideline = match settings.language.as_deref() {
        Some(lang) => format!("\n  13. Write all titles and descriptions in {lang}"),
        None => String::new(),
    };

    format!(
        r#"You are a mind map generation expert. Create a {detail_level} hierarchical structure for the following topic.
  Return ONLY a valid JSON object with the following structure, and nothing else:
  {{
    "topics": [
      {{
        "title": "Main Topic Area",
        "description": "Comprehensive overview of this main topic area",
        "keywords": ["key1", "key2"],
        "subtopics": [
          {{
            "title": "Key Subtopic",
            "description": "Detailed explanation of this subtopic",
            "importance": "high|medium|low",
            "keywords": ["key1", "key2"],
            "points": [
              {{
                "title": "Important Point",
                "description": "Specific detail or example",
                "complexity": "basic|intermediate|advanced",
                "keywords": ["key1", "key2"],
                "examples": ["Example 1", "Example 2"],
                "citations": ["Citation 1", "Citation 2"],
                "subpoints": [
                  "Additional detail 1",
                  "Additional detail 2"
                ]
              }}
            ]
          }}
        ],
        "crossReferences": [
          {{
            "targetTopic": "Other Topic Title",
            "relationship": "Description of relationship",
            "strength": "strong|moderate|weak"
          }}
        ]
      }}
    ],
    "metadata": {{
      "complexity": "basic|intermediate|advanced",
      "estimatedReadingTime": 30,
      "keyTakeaways": ["Key point 1", "Key point 2"],
      "suggestedReadings": ["Resource 1", "Resource 2"]
    }}
  }}

  Important Guidelines:
  1. Create {topic_range} main topics that cover different aspects
  2. Each main topic should have {subtopic_range} subtopics
  3. Each subtopic should have {max_points} key points
  4. Points can have 0-{max_subpoints} subpoints for extra detail
  5. {style_guidelines}
  6. Ensure logical flow and connections between levels
  7. {examples}
  8. {citations}
  9. {definitions}
  10. {cross_references}
  11. Return ONLY the JSON object, no other text
  12. Ensure the JSON is properly formatted{language_guideline}"#,
        detail_level = settings.detail_level.as_str(),
        max_points = settings.max_points,
        max_subpoints = settings.max_subpoints,
        examples = if settings.include_examples {
            "Include specific examples and case studies"
        } else {
            "Keep examples minimal"
        },
        citations = if settings.include_citations {
            "Include relevant citations and references"
        } else {
            "Citations are optional"
        },
        definitions = if settings.include_definitions {
            "Include detailed definitions and explanations"
        } else {
            "Keep definitions concise"
        },
        cross_references = if settings.cross_topic_relations {
            "Create meaningful cross-references between related topics"
        } else {
            "Cross-references are optional"
        },
    )
}
