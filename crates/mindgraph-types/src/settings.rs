//! Generation settings
//!
//! Immutable per generation call. The pipeline only ever sees a settings
//! value that has been through `clamped()`, so downstream code (prompt
//! synthesis, request body) never references an out-of-range value.

use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// How much detail the model is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    #[default]
    Normal,
    Detailed,
    Extreme,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Normal => "normal",
            DetailLevel::Detailed => "detailed",
            DetailLevel::Extreme => "extreme",
        }
    }
}

/// Tree shape preference: more topics vs. more depth per topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TopicDepth {
    #[default]
    Balanced,
    Deep,
    Broad,
}

/// Writing style the model is steered toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    Academic,
    #[default]
    Professional,
    Creative,
}

// =============================================================================
// SETTINGS
// =============================================================================

/// Configuration for one generation call.
///
/// `Default` gives the documented baseline: normal detail, 2500 tokens,
/// 5/4/3/2 counts, temperature 0.7, professional style, balanced depth,
/// all feature flags off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub detail_level: DetailLevel,
    pub max_tokens: u32,
    pub max_topics: u32,
    pub max_subtopics: u32,
    pub max_points: u32,
    pub max_subpoints: u32,
    pub temperature: f32,
    pub topic_depth: TopicDepth,
    pub style: PromptStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub multiple_ai_calls: bool,
    pub include_examples: bool,
    pub include_citations: bool,
    pub include_definitions: bool,
    pub cross_topic_relations: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            detail_level: DetailLevel::Normal,
            max_tokens: 2500,
            max_topics: 5,
            max_subtopics: 4,
            max_points: 3,
            max_subpoints: 2,
            temperature: 0.7,
            topic_depth: TopicDepth::Balanced,
            style: PromptStyle::Professional,
            language: None,
            multiple_ai_calls: false,
            include_examples: false,
            include_citations: false,
            include_definitions: false,
            cross_topic_relations: false,
        }
    }
}

/// Upper bound for the per-level count fields
const MAX_COUNT: u32 = 100;

/// Upper bound for the completion token budget
const MAX_TOKEN_BUDGET: u32 = 32_768;

impl GenerationSettings {
    /// Coerce every numeric field into its valid range. Total - never fails.
    ///
    /// Count fields land in [1, 100], temperature in [0, 1], the token
    /// budget in [1, 32768]. A non-finite temperature (f32::clamp passes
    /// NaN through) falls back to the default.
    pub fn clamped(mut self) -> Self {
        self.max_tokens = self.max_tokens.clamp(1, MAX_TOKEN_BUDGET);
        self.max_topics = self.max_topics.clamp(1, MAX_COUNT);
        self.max_subtopics = self.max_subtopics.clamp(1, MAX_COUNT);
        self.max_points = self.max_points.clamp(1, MAX_COUNT);
        self.max_subpoints = self.max_subpoints.clamp(1, MAX_COUNT);
        self.temperature = if self.temperature.is_finite() {
            self.temperature.clamp(0.0, 1.0)
        } else {
            Self::default().temperature
        };
        self
    }
}

// =============================================================================
// PARTIAL OVERRIDES
// =============================================================================

/// Caller-supplied partial settings, merged over the defaults.
///
/// Every field is optional; unset fields keep their default value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsOverrides {
    pub detail_level: Option<DetailLevel>,
    pub max_tokens: Option<u32>,
    pub max_topics: Option<u32>,
    pub max_subtopics: Option<u32>,
    pub max_points: Option<u32>,
    pub max_subpoints: Option<u32>,
    pub temperature: Option<f32>,
    pub topic_depth: Option<TopicDepth>,
    pub style: Option<PromptStyle>,
    pub language: Option<String>,
    pub multiple_ai_calls: Option<bool>,
    pub include_examples: Option<bool>,
    pub include_citations: Option<bool>,
    pub include_definitions: Option<bool>,
    pub cross_topic_relations: Option<bool>,
}

impl SettingsOverrides {
    /// Merge these overrides over `base`, field by field.
    pub fn apply(self, mut base: GenerationSettings) -> GenerationSettings {
        if let Some(v) = self.detail_level {
            base.detail_level = v;
        }
        if let Some(v) = self.max_tokens {
            base.max_tokens = v;
        }
        if let Some(v) = self.max_topics {
            base.max_topics = v;
        }
        if let Some(v) = self.max_subtopics {
            base.max_subtopics = v;
        }
        if let Some(v) = self.max_points {
            base.max_points = v;
        }
        if let Some(v) = self.max_subpoints {
            base.max_subpoints = v;
        }
        if let Some(v) = self.temperature {
            base.temperature = v;
        }
        if let Some(v) = self.topic_depth {
            base.topic_depth = v;
        }
        if let Some(v) = self.style {
            base.style = v;
        }
        if let Some(v) = self.language {
            base.language = Some(v);
        }
        if let Some(v) = self.multiple_ai_calls {
            base.multiple_ai_calls = v;
        }
        if let Some(v) = self.include_examples {
            base.include_examples = v;
        }
        if let Some(v) = self.include_citations {
            base.include_citations = v;
        }
        if let Some(v) = self.include_definitions {
            base.include_definitions = v;
        }
        if let Some(v) = self.cross_topic_relations {
            base.cross_topic_relations = v;
        }
        base
    }

    /// Merge over the documented defaults.
    pub fn into_settings(self) -> GenerationSettings {
        self.apply(GenerationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let s = GenerationSettings::default();
        assert_eq!(s.detail_level, DetailLevel::Normal);
        assert_eq!(s.max_tokens, 2500);
        assert_eq!(s.max_topics, 5);
        assert_eq!(s.max_subtopics, 4);
        assert_eq!(s.max_points, 3);
        assert_eq!(s.max_subpoints, 2);
        assert_eq!(s.temperature, 0.7);
        assert_eq!(s.topic_depth, TopicDepth::Balanced);
        assert_eq!(s.style, PromptStyle::Professional);
        assert!(!s.multiple_ai_calls);
        assert!(!s.include_examples);
        assert!(!s.include_citations);
        assert!(!s.include_definitions);
        assert!(!s.cross_topic_relations);
    }

    #[test]
    fn test_clamp_count_above_range() {
        let s = GenerationSettings {
            max_topics: 500,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.max_topics, 100);
    }

    #[test]
    fn test_clamp_count_below_range() {
        let s = GenerationSettings {
            max_subtopics: 0,
            max_points: 0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.max_subtopics, 1);
        assert_eq!(s.max_points, 1);
    }

    #[test]
    fn test_clamp_negative_temperature() {
        let s = GenerationSettings {
            temperature: -1.0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.temperature, 0.0);
    }

    #[test]
    fn test_clamp_nan_temperature_falls_back_to_default() {
        let s = GenerationSettings {
            temperature: f32::NAN,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.temperature, 0.7);

        let s = GenerationSettings {
            temperature: f32::INFINITY,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.temperature, 0.7);
    }

    #[test]
    fn test_clamp_temperature_above_one() {
        let s = GenerationSettings {
            temperature: 3.5,
            ..Default::default()
        }
        .clamped();
        assert_eq!(s.temperature, 1.0);
    }

    #[test]
    fn test_clamp_defaults_are_stable() {
        let s = GenerationSettings::default();
        assert_eq!(s.clone().clamped(), s);
    }

    #[test]
    fn test_overrides_unset_fields_keep_defaults() {
        let merged = SettingsOverrides::default().into_settings();
        assert_eq!(merged, GenerationSettings::default());
    }

    #[test]
    fn test_overrides_set_fields_win() {
        let merged = SettingsOverrides {
            max_topics: Some(8),
            style: Some(PromptStyle::Creative),
            cross_topic_relations: Some(true),
            ..Default::default()
        }
        .into_settings();
        assert_eq!(merged.max_topics, 8);
        assert_eq!(merged.style, PromptStyle::Creative);
        assert!(merged.cross_topic_relations);
        // untouched fields stay at defaults
        assert_eq!(merged.max_subtopics, 4);
        assert_eq!(merged.temperature, 0.7);
    }

    #[test]
    fn test_overrides_deserialize_from_partial_json() {
        let overrides: SettingsOverrides =
            serde_json::from_str(r#"{"maxTopics": 7, "topicDepth": "deep"}"#).unwrap();
        let merged = overrides.into_settings();
        assert_eq!(merged.max_topics, 7);
        assert_eq!(merged.topic_depth, TopicDepth::Deep);
        assert_eq!(merged.max_points, 3);
    }
}
