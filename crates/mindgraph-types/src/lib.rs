//! Shared Data Contracts for mindgraph
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing the
//! generation pipeline boundaries.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐  JSON   ┌──────────────────┐  graph   ┌────────────┐
//! │  Chat LLM        │ ◄─────► │  Generation      │ ───────► │  Renderer/ │
//! │  (Deepseek)      │         │  pipeline        │          │  store     │
//! └──────────────────┘         └──────────────────┘          └────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. Data contracts only - no I/O, no behavior beyond coercion and ID helpers
//! 2. camelCase on the wire (both the model reply and the rendered graph)
//! 3. Positions are plain `(f32, f32)` data - no UI toolkit dependency

pub mod document;
pub mod graph;
pub mod ids;
pub mod outline;
pub mod settings;

pub use document::{DocumentMetadata, MindMapDocument};
pub use graph::{
    EdgeKind, EdgeStyle, MindMapEdge, MindMapGraph, MindMapNode, NodeDetails, NodeStyle, NodeTier,
    Position,
};
pub use outline::{
    Complexity, CrossReference, Importance, MindMapOutline, OutlineMetadata, Point, Strength,
    Subtopic, Topic,
};
pub use settings::{DetailLevel, GenerationSettings, PromptStyle, SettingsOverrides, TopicDepth};
