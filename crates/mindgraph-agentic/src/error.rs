//! Generation error taxonomy
//!
//! Every failure in the pipeline maps onto exactly one variant. All are
//! terminal for the current call - nothing is retried internally, and the
//! caller never receives a half-built graph.

use thiserror::Error;

/// Maximum length of the diagnostic snippet carried on validation errors
const SNIPPET_LEN: usize = 120;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network failure or non-success HTTP status from the chat service
    #[error("chat completion request failed: {0}")]
    Transport(String),

    /// Reply arrived but lacked the expected `choices[0].message.content`
    #[error("chat completion reply had no message content")]
    MalformedReply,

    /// Reply text was not valid JSON after code-fence stripping
    #[error("reply was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reply JSON has no `topics` array
    #[error("invalid outline structure: `topics` missing or not an array (got {snippet})")]
    InvalidResponse { snippet: String },

    /// Topic at `index` is missing a title or its `subtopics` array
    #[error("invalid topic at index {index} (got {snippet})")]
    InvalidTopic { index: usize, snippet: String },

    /// Subtopic is missing a title or its `points` array
    #[error("invalid subtopic at topic {topic}, subtopic {subtopic} (got {snippet})")]
    InvalidSubtopic {
        topic: usize,
        subtopic: usize,
        snippet: String,
    },

    /// Point has no title
    #[error("invalid point at topic {topic}, subtopic {subtopic}, point {point} (got {snippet})")]
    InvalidPoint {
        topic: usize,
        subtopic: usize,
        point: usize,
        snippet: String,
    },

    /// Surfaced from the document-text extraction collaborator
    #[error("document text extraction failed: {0}")]
    DocumentExtraction(String),
}

impl GenerationError {
    /// Stable machine-readable code for each variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport_error",
            Self::MalformedReply => "malformed_reply",
            Self::Parse(_) => "parse_error",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::InvalidTopic { .. } => "invalid_topic",
            Self::InvalidSubtopic { .. } => "invalid_subtopic",
            Self::InvalidPoint { .. } => "invalid_point",
            Self::DocumentExtraction(_) => "document_extraction_error",
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Truncated rendering of an offending JSON value for diagnostics.
pub(crate) fn snippet(value: &serde_json::Value) -> String {
    let mut text = value.to_string();
    if text.len() > SNIPPET_LEN {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i < SNIPPET_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        text.truncate(cut);
        text.push('…');
    }
    text
}
